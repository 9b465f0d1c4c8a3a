use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::VariationOption;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVariationRequest {
    pub category_id: i32,
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVariationOptionRequest {
    pub value: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VariationWithOptions {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub options: Vec<VariationOption>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VariationList {
    pub items: Vec<VariationWithOptions>,
}

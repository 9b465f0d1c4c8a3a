use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddLikeRequest {
    pub product_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LikedProductList {
    pub items: Vec<Product>,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Banner;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBannerRequest {
    pub product_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBannerRequest {
    pub product_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Just enough of the promoted product to render a banner link.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PromotedProduct {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub image: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BannerWithProduct {
    pub banner: Banner,
    pub product: Option<PromotedProduct>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BannerList {
    pub items: Vec<BannerWithProduct>,
}

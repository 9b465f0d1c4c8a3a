use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Brand, Category, Color, Product, ProductItem};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub nasiya: Option<String>,
    pub price: i64,
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub is_aksiya: bool,
    pub image: Option<String>,
    pub category_id: i32,
    pub brand_id: i32,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub nasiya: Option<String>,
    pub price: Option<i64>,
    pub rating: Option<i32>,
    pub is_aksiya: Option<bool>,
    pub image: Option<String>,
    pub category_id: Option<i32>,
    pub brand_id: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductItemRequest {
    pub color_id: i32,
    pub price: i64,
    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductItemRequest {
    pub color_id: Option<i32>,
    pub price: Option<i64>,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddConfigurationRequest {
    pub variation_option_id: i32,
}

#[derive(Serialize, ToSchema)]
pub struct ProductList {
    pub items: Vec<Product>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductItemList {
    pub items: Vec<ProductItem>,
}

/// A selected option of a SKU, with its variation name resolved.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ConfiguredOption {
    pub id: i32,
    pub variation_id: i32,
    pub variation: String,
    pub value: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductItemDetail {
    pub item: ProductItem,
    pub color: Option<Color>,
    pub options: Vec<ConfiguredOption>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDetail {
    pub product: Product,
    pub category: Option<Category>,
    pub brand: Option<Brand>,
    pub items: Vec<ProductItemDetail>,
}

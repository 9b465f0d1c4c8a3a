use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::ProductItem;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_item_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCartQuantityRequest {
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartList {
    pub items: Vec<CartItemDto>,
    pub total_quantity: i64,
    pub total_price: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartItemDto {
    pub id: i32,
    pub quantity: i32,
    pub item: ProductItem,
    pub product_name: String,
    pub line_total: i64,
}

impl CartList {
    /// Builds the cart view, deriving the badge and checkout totals from the lines.
    pub fn from_lines(items: Vec<CartItemDto>) -> Self {
        let total_quantity = items
            .iter()
            .fold(0i64, |acc, line| acc.saturating_add(i64::from(line.quantity)));
        let total_price = items
            .iter()
            .fold(0i64, |acc, line| acc.saturating_add(line.line_total));
        Self {
            items,
            total_quantity,
            total_price,
        }
    }
}

pub fn line_total(unit_price: i64, quantity: i32) -> i64 {
    unit_price.saturating_mul(i64::from(quantity))
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub fullname: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub image: Option<String>,
    pub role: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub id: i32,
    pub user_id: i32,
    pub street: String,
    pub region: String,
    pub district: String,
    pub created_at: DateTime<Utc>,
}

/// What the storefront profile page renders.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: i32,
    pub fullname: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub image: Option<String>,
    pub role: String,
    pub is_verified: bool,
    pub address: Vec<Address>,
}

impl UserProfile {
    pub fn new(user: entity::users::Model, address: Vec<Address>) -> Self {
        Self {
            id: user.id,
            fullname: user.fullname,
            email: user.email,
            phone_number: user.phone_number,
            image: user.image,
            role: user.role,
            is_verified: user.is_verified,
            address,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Brand {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Color {
    pub id: i32,
    pub name: String,
    pub color_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub summary: Option<String>,
    /// Installment term, e.g. "6 oy".
    pub nasiya: Option<String>,
    pub price: i64,
    pub rating: i32,
    /// On promotion.
    pub is_aksiya: bool,
    pub image: Option<String>,
    pub category_id: i32,
    pub brand_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Banner {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductItem {
    pub id: i32,
    pub product_id: i32,
    pub color_id: i32,
    pub price: i64,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Variation {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VariationOption {
    pub id: i32,
    pub variation_id: i32,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductConfiguration {
    pub id: i32,
    pub product_item_id: i32,
    pub variation_option_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub id: i32,
    pub user_id: i32,
    pub product_item_id: i32,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Like {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<entity::users::Model> for User {
    fn from(model: entity::users::Model) -> Self {
        Self {
            id: model.id,
            fullname: model.fullname,
            email: model.email,
            phone_number: model.phone_number,
            image: model.image,
            role: model.role,
            is_verified: model.is_verified,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::addresses::Model> for Address {
    fn from(model: entity::addresses::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            street: model.street,
            region: model.region,
            district: model.district,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::categories::Model> for Category {
    fn from(model: entity::categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            image: model.image,
            icon: model.icon,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::brands::Model> for Brand {
    fn from(model: entity::brands::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            image: model.image,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::colors::Model> for Color {
    fn from(model: entity::colors::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            color_code: model.color_code,
        }
    }
}

impl From<entity::products::Model> for Product {
    fn from(model: entity::products::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            summary: model.summary,
            nasiya: model.nasiya,
            price: model.price,
            rating: model.rating,
            is_aksiya: model.is_aksiya,
            image: model.image,
            category_id: model.category_id,
            brand_id: model.brand_id,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::banners::Model> for Banner {
    fn from(model: entity::banners::Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            name: model.name,
            description: model.description,
            image: model.image,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::product_items::Model> for ProductItem {
    fn from(model: entity::product_items::Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            color_id: model.color_id,
            price: model.price,
            image: model.image,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::variations::Model> for Variation {
    fn from(model: entity::variations::Model) -> Self {
        Self {
            id: model.id,
            category_id: model.category_id,
            name: model.name,
        }
    }
}

impl From<entity::variation_options::Model> for VariationOption {
    fn from(model: entity::variation_options::Model) -> Self {
        Self {
            id: model.id,
            variation_id: model.variation_id,
            value: model.value,
        }
    }
}

impl From<entity::product_configurations::Model> for ProductConfiguration {
    fn from(model: entity::product_configurations::Model) -> Self {
        Self {
            id: model.id,
            product_item_id: model.product_item_id,
            variation_option_id: model.variation_option_id,
        }
    }
}

impl From<entity::cart_items::Model> for CartItem {
    fn from(model: entity::cart_items::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            product_item_id: model.product_item_id,
            quantity: model.quantity,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::likes::Model> for Like {
    fn from(model: entity::likes::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            product_id: model.product_id,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

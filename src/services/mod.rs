pub mod auth_service;
pub mod banner_service;
pub mod cart_service;
pub mod catalog_service;
pub mod like_service;
pub mod product_service;
pub mod user_service;
pub mod variation_service;

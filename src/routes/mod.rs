use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod banners;
pub mod cart;
pub mod catalog;
pub mod doc;
pub mod health;
pub mod likes;
pub mod params;
pub mod products;
pub mod users;
pub mod variations;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/me", users::me_router())
        .nest("/users", users::router())
        .nest("/categories", catalog::categories_router())
        .nest("/brands", catalog::brands_router())
        .nest("/colors", catalog::colors_router())
        .nest("/products", products::router())
        .nest("/product-items", products::items_router())
        .nest("/variations", variations::router())
        .nest("/variation-options", variations::options_router())
        .nest("/banners", banners::router())
        .nest("/cart", cart::router())
        .nest("/likes", likes::router())
}

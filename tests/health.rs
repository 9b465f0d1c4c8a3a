use axum::Json;
use utoipa::OpenApi;

use storefront_api::routes::{doc::ApiDoc, health::health_check};

#[tokio::test]
async fn liveness_reports_ok() {
    let Json(body) = health_check().await;
    assert_eq!(body.message, "Health check");
    assert_eq!(body.data.map(|d| d.status).as_deref(), Some("ok"));
}

#[test]
fn openapi_lists_profile_and_seeded_catalog_routes() {
    let doc = ApiDoc::openapi();
    for path in [
        "/health/ready",
        "/api/me/{user_id}",
        "/api/users/{user_id}",
        "/api/products/{id}/items",
        "/api/product-items/{id}/configurations/{option_id}",
        "/api/variations",
        "/api/banners",
        "/api/cart/{product_item_id}",
        "/api/likes",
    ] {
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    let components = doc.components.expect("components");
    assert!(components.security_schemes.contains_key("bearer_auth"));
    assert!(components.schemas.contains_key("UserProfile"));
}

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use std::collections::BTreeMap;

use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult, Value};
use serde_json::Value as Json;
use tower::ServiceExt;

use storefront_api::{
    app::build_app,
    config::AppConfig,
    entity::{
        categories, likes, product_configurations, product_items, products, variation_options,
        variations,
    },
    models::{ROLE_ADMIN, ROLE_USER},
    services::auth_service::issue_token,
    state::AppState,
};

const SECRET: &str = "router-secret";

fn config() -> AppConfig {
    AppConfig {
        database_url: "postgres://unused".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: SECRET.to_string(),
        jwt_ttl_hours: 1,
        seed_on_startup: false,
        cors_origin: None,
        migrations_dir: "migrations".to_string(),
    }
}

fn app_with(db: DatabaseConnection) -> Router {
    build_app(AppState::new(db, config())).unwrap()
}

fn empty_app() -> Router {
    app_with(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
}

fn bearer(user_id: i32, role: &str) -> String {
    format!("Bearer {}", issue_token(SECRET, user_id, role, 1).unwrap())
}

fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
}

fn now() -> chrono::DateTime<chrono::FixedOffset> {
    chrono::Utc::now().fixed_offset()
}

fn admin_request(method: &str, uri: &str, payload: Option<Json>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, bearer(1, ROLE_ADMIN));
    match payload {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn product(id: i32) -> products::Model {
    products::Model {
        id,
        name: "Play Station 5".to_string(),
        description: None,
        summary: None,
        nasiya: Some("12 oy".to_string()),
        price: 599,
        rating: 4,
        is_aksiya: true,
        image: Some("/ps5.png".to_string()),
        category_id: 4,
        brand_id: 5,
        created_at: now(),
    }
}

async fn body_json(response: axum::response::Response) -> Json {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let response = empty_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let body = body_json(response).await;
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn unknown_path_is_json_404() {
    let response = empty_app()
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Not Found");
    assert_eq!(body["data"]["path"], "/nope");
}

#[tokio::test]
async fn profile_requires_token() {
    let response = empty_app()
        .oneshot(Request::get("/api/me/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_unauthorized() {
    let response = empty_app()
        .oneshot(
            Request::get("/api/cart")
                .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn other_users_profile_is_forbidden() {
    let response = empty_app()
        .oneshot(
            Request::get("/api/me/2")
                .header(header::AUTHORIZATION, bearer(1, ROLE_USER))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn invalid_profile_update_lists_field_errors() {
    let payload = serde_json::json!({
        "fullname": "ab",
        "email": "not-an-email",
        "phone_number": "+998"
    });
    let response = empty_app()
        .oneshot(
            Request::put("/api/users/1")
                .header(header::AUTHORIZATION, bearer(1, ROLE_USER))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    let errors = &body["data"]["errors"];
    assert!(errors["fullname"].is_string());
    assert!(errors["email"].is_string());
    assert!(errors["phone_number"].is_string());
}

#[tokio::test]
async fn catalog_writes_need_admin() {
    let payload = serde_json::json!({ "name": "Planshetlar" });
    let response = empty_app()
        .oneshot(
            Request::post("/api/categories")
                .header(header::AUTHORIZATION, bearer(5, ROLE_USER))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_blank_category_name_is_rejected() {
    let payload = serde_json::json!({ "name": "   " });
    let response = empty_app()
        .oneshot(
            Request::post("/api/categories")
                .header(header::AUTHORIZATION, bearer(1, ROLE_ADMIN))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn categories_are_listed_from_the_database() {
    let now = chrono::Utc::now().fixed_offset();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            categories::Model {
                id: 1,
                name: "Kiryuvish mashinalari".to_string(),
                image: Some("/kiryuvish_mashinasi.png".to_string()),
                icon: Some("/kiryuvish_mashinasi.svg".to_string()),
                created_at: now,
            },
            categories::Model {
                id: 2,
                name: "Noutbuklar".to_string(),
                image: None,
                icon: None,
                created_at: now,
            },
        ]])
        .into_connection();

    let response = app_with(db)
        .oneshot(Request::get("/api/categories").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["meta"]["total"], 2);
    assert_eq!(body["data"]["items"][1]["name"], "Noutbuklar");
}

#[tokio::test]
async fn readiness_reports_unavailable_database() {
    // A closed connection cannot be pinged.
    let db = DatabaseConnection::Disconnected;
    let response = app_with(db)
        .oneshot(Request::get("/health/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}


#[tokio::test]
async fn category_with_products_cannot_be_deleted() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[count_row(3)]])
        .into_connection();

    let response = app_with(db)
        .oneshot(admin_request("DELETE", "/api/categories/2", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["data"]["error"], "Bad Request Category still has products");
}

#[tokio::test]
async fn brand_with_products_cannot_be_deleted() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[count_row(1)]])
        .into_connection();

    let response = app_with(db)
        .oneshot(admin_request("DELETE", "/api/brands/5", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn color_used_by_items_cannot_be_deleted() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[count_row(2)]])
        .into_connection();

    let response = app_with(db)
        .oneshot(admin_request("DELETE", "/api/colors/1", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_category_delete_is_404() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[count_row(0)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let response = app_with(db)
        .oneshot(admin_request("DELETE", "/api/categories/99", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_category_name_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![categories::Model {
            id: 2,
            name: "Noutbuklar".to_string(),
            image: None,
            icon: None,
            created_at: now(),
        }]])
        .into_connection();

    let response = app_with(db)
        .oneshot(admin_request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({ "name": "Noutbuklar" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["data"]["error"], "Bad Request Category name is already taken");
}

#[tokio::test]
async fn product_in_unknown_category_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<categories::Model>::new()])
        .into_connection();

    let payload = serde_json::json!({
        "name": "Nokia 3310",
        "price": 99,
        "rating": 4,
        "is_aksiya": false,
        "category_id": 42,
        "brand_id": 3
    });
    let response = app_with(db)
        .oneshot(admin_request("POST", "/api/products", Some(payload)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["data"]["error"], "Bad Request Category not found");
}

#[tokio::test]
async fn banner_for_unknown_product_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<products::Model>::new()])
        .into_connection();

    let payload = serde_json::json!({ "product_id": 404, "name": "Yangi aksiya" });
    let response = app_with(db)
        .oneshot(admin_request("POST", "/api/banners", Some(payload)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["data"]["error"], "Bad Request Product not found");
}

#[tokio::test]
async fn configuring_an_option_twice_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![product_items::Model {
            id: 3,
            product_id: 3,
            color_id: 3,
            price: 3999999,
            image: Some("macbookprom2.png".to_string()),
            created_at: now(),
        }]])
        .append_query_results([vec![variation_options::Model {
            id: 2,
            variation_id: 2,
            value: "8 GB".to_string(),
            created_at: now(),
        }]])
        .append_query_results([vec![product_configurations::Model {
            id: 1,
            product_item_id: 3,
            variation_option_id: 2,
            created_at: now(),
        }]])
        .into_connection();

    let response = app_with(db)
        .oneshot(admin_request(
            "POST",
            "/api/product-items/3/configurations",
            Some(serde_json::json!({ "variation_option_id": 2 })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn variations_are_listed_with_their_options() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            variations::Model {
                id: 2,
                category_id: 2,
                name: "RAM".to_string(),
                created_at: now(),
            },
            variations::Model {
                id: 3,
                category_id: 2,
                name: "Hotira".to_string(),
                created_at: now(),
            },
            variations::Model {
                id: 4,
                category_id: 2,
                name: "Ekran hajmi".to_string(),
                created_at: now(),
            },
        ]])
        .append_query_results([vec![
            variation_options::Model {
                id: 2,
                variation_id: 2,
                value: "8 GB".to_string(),
                created_at: now(),
            },
            variation_options::Model {
                id: 3,
                variation_id: 3,
                value: "1 TB".to_string(),
                created_at: now(),
            },
            variation_options::Model {
                id: 8,
                variation_id: 2,
                value: "16 GB".to_string(),
                created_at: now(),
            },
        ]])
        .into_connection();

    let response = app_with(db)
        .oneshot(
            Request::get("/api/variations?category_id=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let items = &body["data"]["items"];
    assert_eq!(body["meta"]["total"], 3);
    assert_eq!(items[0]["name"], "RAM");
    assert_eq!(items[0]["options"][0]["value"], "8 GB");
    assert_eq!(items[0]["options"][1]["value"], "16 GB");
    assert_eq!(items[1]["options"][0]["value"], "1 TB");
    assert_eq!(items[2]["options"], serde_json::json!([]));
}

#[tokio::test]
async fn liking_an_already_liked_product_returns_the_existing_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![product(5)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .append_query_results([vec![likes::Model {
            id: 11,
            user_id: 7,
            product_id: 5,
            created_at: now(),
        }]])
        .into_connection();

    let response = app_with(db)
        .oneshot(
            Request::post("/api/likes")
                .header(header::AUTHORIZATION, bearer(7, ROLE_USER))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::json!({ "product_id": 5 }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["id"], 11);
    assert_eq!(body["data"]["product_id"], 5);
}

#[tokio::test]
async fn product_page_is_wrapped_in_items() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[count_row(1)]])
        .append_query_results([vec![product(5)]])
        .into_connection();

    let response = app_with(db)
        .oneshot(
            Request::get("/api/products?q=50%25&per_page=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["items"][0]["name"], "Play Station 5");
    assert_eq!(body["meta"]["total"], 1);
}

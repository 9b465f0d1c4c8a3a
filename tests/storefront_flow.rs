//! End-to-end checks against a real Postgres. Set `TEST_DATABASE_URL` (or
//! `DATABASE_URL`) to run them; they are skipped otherwise.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use storefront_api::{
    app::build_app,
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    seed::{SeedOutcome, seed_all},
    state::AppState,
};

fn database_url() -> Option<String> {
    std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
}

async fn setup() -> Option<(Router, AppState)> {
    let Some(url) = database_url() else {
        eprintln!("skipping: TEST_DATABASE_URL / DATABASE_URL not set");
        return None;
    };
    let orm = create_orm_conn(&url).await.unwrap();
    run_migrations(&orm, "migrations").await.unwrap();

    let config = AppConfig {
        database_url: url,
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: "flow-secret".to_string(),
        jwt_ttl_hours: 1,
        seed_on_startup: false,
        cors_origin: None,
        migrations_dir: "migrations".to_string(),
    };
    let state = AppState::new(orm, config);
    let app = build_app(state.clone()).unwrap();
    Some((app, state))
}

async fn call(app: &Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn seeding_twice_inserts_nothing_the_second_time() {
    let Some((_, state)) = setup().await else { return };

    seed_all(state.db()).await.unwrap();
    let second = seed_all(state.db()).await.unwrap();

    assert_eq!(second.inserted(), 0);
    assert_eq!(second.outcome("categories"), Some(SeedOutcome::AlreadySeeded));
    assert_eq!(second.outcome("users"), Some(SeedOutcome::AlreadySeeded));
}

#[tokio::test]
async fn register_login_and_edit_profile() {
    let Some((app, _state)) = setup().await else { return };
    let email = format!("flow-{}@example.com", uuid::Uuid::new_v4().simple());

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "fullname": "Flow Tester", "email": email, "password": "secret123" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "fullname": "Flow Tester", "email": email, "password": "secret123" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": email, "password": "secret123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let token = body["data"]["accessToken"].as_str().unwrap().to_string();
    let user_id = body["data"]["user_id"].as_i64().unwrap();

    let (status, body) = call(&app, Method::GET, &format!("/api/me/{user_id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], email.as_str());
    assert_eq!(body["data"]["address"], json!([]));

    let (status, body) = call(
        &app,
        Method::PUT,
        &format!("/api/users/{user_id}"),
        Some(&token),
        Some(json!({ "fullname": "Flow Tester Renamed", "phone_number": "+998901234567" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["fullname"], "Flow Tester Renamed");
    assert_eq!(body["data"]["phone_number"], "+998901234567");

    let (status, body) = call(
        &app,
        Method::POST,
        &format!("/api/users/{user_id}/addresses"),
        Some(&token),
        Some(json!({ "street": "Amir Temur 1", "region": "Toshkent", "district": "Yunusobod" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");

    let (_, body) = call(&app, Method::GET, "/api/me", Some(&token), None).await;
    assert_eq!(body["data"]["address"][0]["district"], "Yunusobod");

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": email, "password": "wrong-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cart_and_likes_round_trip() {
    let Some((app, state)) = setup().await else { return };
    seed_all(state.db()).await.unwrap();

    let (_, body) = call(&app, Method::GET, "/api/products?per_page=1", None, None).await;
    let Some(product_id) = body["data"]["items"][0]["id"].as_i64() else {
        eprintln!("skipping: no products in database");
        return;
    };
    let (_, body) = call(&app, Method::GET, &format!("/api/products/{product_id}/items"), None, None).await;
    let Some(item_id) = body["data"]["items"][0]["id"].as_i64() else {
        eprintln!("skipping: product has no items");
        return;
    };

    let email = format!("cart-{}@example.com", uuid::Uuid::new_v4().simple());
    call(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "fullname": "Cart Tester", "email": email, "password": "secret123" })),
    )
    .await;
    let (_, body) = call(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": email, "password": "secret123" })),
    )
    .await;
    let token = body["data"]["accessToken"].as_str().unwrap().to_string();

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/cart",
        Some(&token),
        Some(json!({ "product_item_id": item_id, "quantity": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/cart",
        Some(&token),
        Some(json!({ "product_item_id": item_id, "quantity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app, Method::GET, "/api/cart", Some(&token), None).await;
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["data"]["total_quantity"], 2);

    let (status, _) = call(&app, Method::DELETE, &format!("/api/cart/{item_id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call(&app, Method::DELETE, &format!("/api/cart/{item_id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for _ in 0..2 {
        let (status, _) = call(
            &app,
            Method::POST,
            "/api/likes",
            Some(&token),
            Some(json!({ "product_id": product_id })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    let (_, body) = call(&app, Method::GET, "/api/likes", Some(&token), None).await;
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["id"], product_id);
}

fn page_items(body: &Value) -> Vec<Value> {
    body["data"]["items"].as_array().cloned().unwrap_or_default()
}

#[tokio::test]
async fn product_filters_and_sorting() {
    let Some((app, state)) = setup().await else { return };
    seed_all(state.db()).await.unwrap();

    let (status, body) = call(&app, Method::GET, "/api/products?q=galaxy", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let items = page_items(&body);
    assert!(!items.is_empty());
    assert!(items.iter().all(|p| {
        let text = format!("{} {}", p["name"], p["description"]).to_lowercase();
        text.contains("galaxy")
    }));

    // A literal `%` must not act as a wildcard.
    let (_, body) = call(&app, Method::GET, "/api/products?q=%25%25%25", None, None).await;
    assert!(page_items(&body).is_empty(), "{body}");

    let (_, body) = call(
        &app,
        Method::GET,
        "/api/products?min_price=1000&max_price=15000&per_page=100",
        None,
        None,
    )
    .await;
    let items = page_items(&body);
    assert!(!items.is_empty());
    assert!(items.iter().all(|p| {
        let price = p["price"].as_i64().unwrap();
        (1000..=15000).contains(&price)
    }));

    let (_, body) = call(&app, Method::GET, "/api/products?is_aksiya=true&per_page=100", None, None).await;
    let items = page_items(&body);
    assert!(!items.is_empty());
    assert!(items.iter().all(|p| p["is_aksiya"] == true));

    let (_, body) = call(
        &app,
        Method::GET,
        "/api/products?sort_by=price&sort_order=asc&per_page=100",
        None,
        None,
    )
    .await;
    let prices: Vec<i64> = page_items(&body)
        .iter()
        .map(|p| p["price"].as_i64().unwrap())
        .collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]), "{prices:?}");
}

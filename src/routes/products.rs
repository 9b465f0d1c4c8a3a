use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
};

use crate::{
    dto::products::{
        AddConfigurationRequest, CreateProductItemRequest, CreateProductRequest, ProductDetail,
        ProductItemList, ProductList, UpdateProductItemRequest, UpdateProductRequest,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Product, ProductConfiguration, ProductItem},
    response::{ApiResponse, Created, created},
    routes::params::ProductQuery,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/{id}/items", get(list_items).post(create_item))
}

pub fn items_router() -> Router<AppState> {
    Router::new()
        .route("/{id}", put(update_item).delete(delete_item))
        .route("/{id}/configurations", post(add_configuration))
        .route(
            "/{id}/configurations/{option_id}",
            delete(remove_configuration),
        )
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("q" = Option<String>, Query, description = "Search in name and description"),
        ("category_id" = Option<i32>, Query, description = "Filter by category"),
        ("brand_id" = Option<i32>, Query, description = "Filter by brand"),
        ("min_price" = Option<i64>, Query, description = "Minimum price"),
        ("max_price" = Option<i64>, Query, description = "Maximum price"),
        ("is_aksiya" = Option<bool>, Query, description = "Only promoted products"),
        ("sort_by" = Option<String>, Query, description = "created_at | price | name | rating"),
        ("sort_order" = Option<String>, Query, description = "asc | desc, default desc")
    ),
    responses(
        (status = 200, description = "List products", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    Ok(Json(product_service::list_products(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product with category, brand and items", body = ApiResponse<ProductDetail>),
        (status = 404, description = "Product not found")
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<ProductDetail>>> {
    Ok(Json(product_service::get_product(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<Product>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateProductRequest>,
) -> AppResult<Created<Product>> {
    let resp = product_service::create_product(&state, &user, payload).await?;
    Ok(created(resp))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<Product>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductRequest>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::update_product(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(product_service::delete_product(&state, &user, id).await?))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/items",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Items of a product", body = ApiResponse<ProductItemList>),
        (status = 404, description = "Product not found")
    ),
    tag = "Products"
)]
pub async fn list_items(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<ProductItemList>>> {
    Ok(Json(product_service::list_items(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/products/{id}/items",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = CreateProductItemRequest,
    responses(
        (status = 201, description = "Item created", body = ApiResponse<ProductItem>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn create_item(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<CreateProductItemRequest>,
) -> AppResult<Created<ProductItem>> {
    let resp = product_service::create_item(&state, &user, id, payload).await?;
    Ok(created(resp))
}

#[utoipa::path(
    put,
    path = "/api/product-items/{id}",
    params(
        ("id" = i32, Path, description = "Product item ID")
    ),
    request_body = UpdateProductItemRequest,
    responses(
        (status = 200, description = "Item updated", body = ApiResponse<ProductItem>),
        (status = 404, description = "Item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn update_item(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductItemRequest>,
) -> AppResult<Json<ApiResponse<ProductItem>>> {
    let resp = product_service::update_item(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/product-items/{id}",
    params(
        ("id" = i32, Path, description = "Product item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(product_service::delete_item(&state, &user, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/product-items/{id}/configurations",
    params(
        ("id" = i32, Path, description = "Product item ID")
    ),
    request_body = AddConfigurationRequest,
    responses(
        (status = 201, description = "Option attached", body = ApiResponse<ProductConfiguration>),
        (status = 400, description = "Option missing or already attached"),
        (status = 404, description = "Item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn add_configuration(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<AddConfigurationRequest>,
) -> AppResult<Created<ProductConfiguration>> {
    let resp = product_service::add_configuration(&state, &user, id, payload).await?;
    Ok(created(resp))
}

#[utoipa::path(
    delete,
    path = "/api/product-items/{id}/configurations/{option_id}",
    params(
        ("id" = i32, Path, description = "Product item ID"),
        ("option_id" = i32, Path, description = "Variation option ID")
    ),
    responses(
        (status = 200, description = "Option detached", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Configuration not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn remove_configuration(
    State(state): State<AppState>,
    user: AuthUser,
    Path((id, option_id)): Path<(i32, i32)>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = product_service::remove_configuration(&state, &user, id, option_id).await?;
    Ok(Json(resp))
}

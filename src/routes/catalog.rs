use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    dto::catalog::{
        BrandList, CategoryList, ColorList, CreateBrandRequest, CreateCategoryRequest,
        CreateColorRequest, UpdateBrandRequest, UpdateCategoryRequest,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Brand, Category, Color},
    response::{ApiResponse, Created, created},
    services::catalog_service,
    state::AppState,
};

pub fn categories_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
}

pub fn brands_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_brands).post(create_brand))
        .route("/{id}", get(get_brand).put(update_brand).delete(delete_brand))
}

pub fn colors_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_colors).post(create_color))
        .route("/{id}", delete(delete_color))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List categories", body = ApiResponse<CategoryList>)
    ),
    tag = "Catalog"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CategoryList>>> {
    Ok(Json(catalog_service::list_categories(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category", body = ApiResponse<Category>),
        (status = 404, description = "Category not found")
    ),
    tag = "Catalog"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Category>>> {
    Ok(Json(catalog_service::get_category(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<Category>),
        (status = 400, description = "Validation failed or name taken"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn create_category(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateCategoryRequest>,
) -> AppResult<Created<Category>> {
    let resp = catalog_service::create_category(&state, &user, payload).await?;
    Ok(created(resp))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<Category>),
        (status = 404, description = "Category not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn update_category(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let resp = catalog_service::update_category(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Category not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(catalog_service::delete_category(&state, &user, id).await?))
}

#[utoipa::path(
    get,
    path = "/api/brands",
    responses(
        (status = 200, description = "List brands", body = ApiResponse<BrandList>)
    ),
    tag = "Catalog"
)]
pub async fn list_brands(State(state): State<AppState>) -> AppResult<Json<ApiResponse<BrandList>>> {
    Ok(Json(catalog_service::list_brands(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/brands/{id}",
    params(
        ("id" = i32, Path, description = "Brand ID")
    ),
    responses(
        (status = 200, description = "Brand", body = ApiResponse<Brand>),
        (status = 404, description = "Brand not found")
    ),
    tag = "Catalog"
)]
pub async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Brand>>> {
    Ok(Json(catalog_service::get_brand(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/brands",
    request_body = CreateBrandRequest,
    responses(
        (status = 201, description = "Brand created", body = ApiResponse<Brand>),
        (status = 400, description = "Validation failed or name taken"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn create_brand(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateBrandRequest>,
) -> AppResult<Created<Brand>> {
    let resp = catalog_service::create_brand(&state, &user, payload).await?;
    Ok(created(resp))
}

#[utoipa::path(
    put,
    path = "/api/brands/{id}",
    params(
        ("id" = i32, Path, description = "Brand ID")
    ),
    request_body = UpdateBrandRequest,
    responses(
        (status = 200, description = "Brand updated", body = ApiResponse<Brand>),
        (status = 404, description = "Brand not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn update_brand(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBrandRequest>,
) -> AppResult<Json<ApiResponse<Brand>>> {
    let resp = catalog_service::update_brand(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/brands/{id}",
    params(
        ("id" = i32, Path, description = "Brand ID")
    ),
    responses(
        (status = 200, description = "Brand deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Brand not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn delete_brand(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(catalog_service::delete_brand(&state, &user, id).await?))
}

#[utoipa::path(
    get,
    path = "/api/colors",
    responses(
        (status = 200, description = "List colors", body = ApiResponse<ColorList>)
    ),
    tag = "Catalog"
)]
pub async fn list_colors(State(state): State<AppState>) -> AppResult<Json<ApiResponse<ColorList>>> {
    Ok(Json(catalog_service::list_colors(&state).await?))
}

#[utoipa::path(
    post,
    path = "/api/colors",
    request_body = CreateColorRequest,
    responses(
        (status = 201, description = "Color created", body = ApiResponse<Color>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn create_color(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateColorRequest>,
) -> AppResult<Created<Color>> {
    let resp = catalog_service::create_color(&state, &user, payload).await?;
    Ok(created(resp))
}

#[utoipa::path(
    delete,
    path = "/api/colors/{id}",
    params(
        ("id" = i32, Path, description = "Color ID")
    ),
    responses(
        (status = 200, description = "Color deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Color not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn delete_color(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(catalog_service::delete_color(&state, &user, id).await?))
}

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post},
};

use crate::{
    dto::variations::{CreateVariationOptionRequest, CreateVariationRequest, VariationList},
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Variation, VariationOption},
    response::{ApiResponse, Created, created},
    routes::params::VariationQuery,
    services::variation_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_variations).post(create_variation))
        .route("/{id}", delete(delete_variation))
        .route("/{id}/options", post(create_option))
}

pub fn options_router() -> Router<AppState> {
    Router::new().route("/{id}", delete(delete_option))
}

#[utoipa::path(
    get,
    path = "/api/variations",
    params(
        ("category_id" = Option<i32>, Query, description = "Only variations of this category")
    ),
    responses(
        (status = 200, description = "Variations with their options", body = ApiResponse<VariationList>)
    ),
    tag = "Variations"
)]
pub async fn list_variations(
    State(state): State<AppState>,
    Query(query): Query<VariationQuery>,
) -> AppResult<Json<ApiResponse<VariationList>>> {
    Ok(Json(variation_service::list_variations(&state, query).await?))
}

#[utoipa::path(
    post,
    path = "/api/variations",
    request_body = CreateVariationRequest,
    responses(
        (status = 201, description = "Variation created", body = ApiResponse<Variation>),
        (status = 400, description = "Validation failed or category not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Variations"
)]
pub async fn create_variation(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateVariationRequest>,
) -> AppResult<Created<Variation>> {
    let resp = variation_service::create_variation(&state, &user, payload).await?;
    Ok(created(resp))
}

#[utoipa::path(
    delete,
    path = "/api/variations/{id}",
    params(
        ("id" = i32, Path, description = "Variation ID")
    ),
    responses(
        (status = 200, description = "Variation deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Variation not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Variations"
)]
pub async fn delete_variation(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(variation_service::delete_variation(&state, &user, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/variations/{id}/options",
    params(
        ("id" = i32, Path, description = "Variation ID")
    ),
    request_body = CreateVariationOptionRequest,
    responses(
        (status = 201, description = "Option created", body = ApiResponse<VariationOption>),
        (status = 404, description = "Variation not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Variations"
)]
pub async fn create_option(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<CreateVariationOptionRequest>,
) -> AppResult<Created<VariationOption>> {
    let resp = variation_service::create_option(&state, &user, id, payload).await?;
    Ok(created(resp))
}

#[utoipa::path(
    delete,
    path = "/api/variation-options/{id}",
    params(
        ("id" = i32, Path, description = "Variation option ID")
    ),
    responses(
        (status = 200, description = "Option deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Option not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Variations"
)]
pub async fn delete_option(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(variation_service::delete_option(&state, &user, id).await?))
}

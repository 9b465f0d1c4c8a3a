use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get},
};

use crate::{
    dto::likes::{AddLikeRequest, LikedProductList},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Like,
    response::ApiResponse,
    routes::params::Pagination,
    services::like_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_likes).post(add_like))
        .route("/{product_id}", delete(remove_like))
}

#[utoipa::path(
    get,
    path = "/api/likes",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "Liked products of current user", body = ApiResponse<LikedProductList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Likes"
)]
pub async fn list_likes(
    State(state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<LikedProductList>>> {
    Ok(Json(like_service::list_likes(&state, &user, pagination).await?))
}

#[utoipa::path(
    post,
    path = "/api/likes",
    request_body = AddLikeRequest,
    responses(
        (status = 200, description = "Product liked", body = ApiResponse<Like>),
        (status = 400, description = "Product not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Likes"
)]
pub async fn add_like(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<AddLikeRequest>,
) -> AppResult<Json<ApiResponse<Like>>> {
    Ok(Json(like_service::add_like(&state, &user, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/likes/{product_id}",
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Like removed", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Like not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Likes"
)]
pub async fn remove_like(
    State(state): State<AppState>,
    user: AuthUser,
    Path(product_id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(like_service::remove_like(&state, &user, product_id).await?))
}

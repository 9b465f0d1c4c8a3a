use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};

use crate::{
    dto::banners::{BannerList, CreateBannerRequest, UpdateBannerRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Banner,
    response::{ApiResponse, Created, created},
    services::banner_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_banners).post(create_banner))
        .route("/{id}", put(update_banner).delete(delete_banner))
}

#[utoipa::path(
    get,
    path = "/api/banners",
    responses(
        (status = 200, description = "Banners with promoted products", body = ApiResponse<BannerList>)
    ),
    tag = "Banners"
)]
pub async fn list_banners(State(state): State<AppState>) -> AppResult<Json<ApiResponse<BannerList>>> {
    Ok(Json(banner_service::list_banners(&state).await?))
}

#[utoipa::path(
    post,
    path = "/api/banners",
    request_body = CreateBannerRequest,
    responses(
        (status = 201, description = "Banner created", body = ApiResponse<Banner>),
        (status = 400, description = "Validation failed or product not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Banners"
)]
pub async fn create_banner(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateBannerRequest>,
) -> AppResult<Created<Banner>> {
    let resp = banner_service::create_banner(&state, &user, payload).await?;
    Ok(created(resp))
}

#[utoipa::path(
    put,
    path = "/api/banners/{id}",
    params(
        ("id" = i32, Path, description = "Banner ID")
    ),
    request_body = UpdateBannerRequest,
    responses(
        (status = 200, description = "Banner updated", body = ApiResponse<Banner>),
        (status = 404, description = "Banner not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Banners"
)]
pub async fn update_banner(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBannerRequest>,
) -> AppResult<Json<ApiResponse<Banner>>> {
    let resp = banner_service::update_banner(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/banners/{id}",
    params(
        ("id" = i32, Path, description = "Banner ID")
    ),
    responses(
        (status = 200, description = "Banner deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Banner not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Banners"
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(banner_service::delete_banner(&state, &user, id).await?))
}

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
};

use crate::{
    dto::users::{CreateAddressRequest, UpdateProfileRequest, UserList},
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Address, UserProfile},
    response::{ApiResponse, Created, created},
    routes::params::Pagination,
    services::user_service,
    state::AppState,
};

pub fn me_router() -> Router<AppState> {
    Router::new()
        .route("/", get(current_profile))
        .route("/{user_id}", get(get_profile))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/{user_id}", put(update_profile))
        .route("/{user_id}/addresses", post(add_address))
        .route("/{user_id}/addresses/{address_id}", delete(remove_address))
}

#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Profile of the caller", body = ApiResponse<UserProfile>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn current_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<UserProfile>>> {
    let resp = user_service::get_profile(&state, &user, user.user_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/me/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile with addresses", body = ApiResponse<UserProfile>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthUser,
    Path(user_id): Path<i32>,
) -> AppResult<Json<ApiResponse<UserProfile>>> {
    let resp = user_service::get_profile(&state, &user, user_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/users/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = ApiResponse<UserProfile>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<ApiResponse<UserProfile>>> {
    let resp = user_service::update_profile(&state, &user, user_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/users",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "List users", body = ApiResponse<UserList>),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<UserList>>> {
    let resp = user_service::list_users(&state, &user, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/users/{user_id}/addresses",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = CreateAddressRequest,
    responses(
        (status = 201, description = "Address added", body = ApiResponse<Address>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn add_address(
    State(state): State<AppState>,
    user: AuthUser,
    Path(user_id): Path<i32>,
    Json(payload): Json<CreateAddressRequest>,
) -> AppResult<Created<Address>> {
    let resp = user_service::add_address(&state, &user, user_id, payload).await?;
    Ok(created(resp))
}

#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/addresses/{address_id}",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("address_id" = i32, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Address removed", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Address not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn remove_address(
    State(state): State<AppState>,
    user: AuthUser,
    Path((user_id, address_id)): Path<(i32, i32)>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = user_service::remove_address(&state, &user, user_id, address_id).await?;
    Ok(Json(resp))
}

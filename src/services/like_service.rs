use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, sea_query::OnConflict,
};

use crate::{
    audit,
    dto::likes::{AddLikeRequest, LikedProductList},
    entity::{
        likes::{ActiveModel as LikeActive, Column as LikeCol, Entity as Likes},
        products::Entity as Products,
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{Like, Product},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_likes(
    state: &AppState,
    user: &AuthUser,
    pagination: Pagination,
) -> AppResult<ApiResponse<LikedProductList>> {
    let (page, limit, offset) = pagination.normalize();

    let finder = Likes::find()
        .filter(LikeCol::UserId.eq(user.user_id))
        .order_by_desc(LikeCol::CreatedAt)
        .order_by_desc(LikeCol::Id);

    let total = finder.clone().count(state.db()).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .find_also_related(Products)
        .all(state.db())
        .await?
        .into_iter()
        .filter_map(|(_, product)| product.map(Product::from))
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("OK", LikedProductList { items }, Some(meta)))
}

pub async fn add_like(
    state: &AppState,
    user: &AuthUser,
    payload: AddLikeRequest,
) -> AppResult<ApiResponse<Like>> {
    Products::find_by_id(payload.product_id)
        .one(state.db())
        .await?
        .ok_or_else(|| AppError::BadRequest("Product not found".into()))?;

    // Liking twice is a no-op.
    Likes::insert(LikeActive {
        id: NotSet,
        user_id: Set(user.user_id),
        product_id: Set(payload.product_id),
        created_at: NotSet,
    })
    .on_conflict(
        OnConflict::columns([LikeCol::UserId, LikeCol::ProductId])
            .do_nothing()
            .to_owned(),
    )
    .exec_without_returning(state.db())
    .await?;

    let like = Likes::find()
        .filter(
            Condition::all()
                .add(LikeCol::UserId.eq(user.user_id))
                .add(LikeCol::ProductId.eq(payload.product_id)),
        )
        .one(state.db())
        .await?
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Like row missing after insert")))?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "like_add",
        "likes",
        serde_json::json!({ "product_id": payload.product_id }),
    )
    .await;

    Ok(ApiResponse::success("Liked", Like::from(like), Some(Meta::empty())))
}

pub async fn remove_like(
    state: &AppState,
    user: &AuthUser,
    product_id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Likes::delete_many()
        .filter(
            Condition::all()
                .add(LikeCol::UserId.eq(user.user_id))
                .add(LikeCol::ProductId.eq(product_id)),
        )
        .exec(state.db())
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        state.db(),
        Some(user.user_id),
        "like_remove",
        "likes",
        serde_json::json!({ "product_id": product_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Removed from likes",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

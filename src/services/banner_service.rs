use std::collections::HashMap;

use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    audit,
    dto::banners::{
        BannerList, BannerWithProduct, CreateBannerRequest, PromotedProduct, UpdateBannerRequest,
    },
    entity::{
        banners::{ActiveModel as BannerActive, Column as BannerCol, Entity as Banners},
        products::{Column as ProdCol, Entity as Products},
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Banner,
    response::{ApiResponse, Meta},
    state::AppState,
    validation::{self, FieldErrors},
};

pub async fn list_banners(state: &AppState) -> AppResult<ApiResponse<BannerList>> {
    let banners = Banners::find()
        .order_by_asc(BannerCol::Id)
        .all(state.db())
        .await?;

    let product_ids: Vec<i32> = banners.iter().map(|b| b.product_id).collect();
    let mut products: HashMap<i32, PromotedProduct> = HashMap::new();
    if !product_ids.is_empty() {
        for product in Products::find()
            .filter(ProdCol::Id.is_in(product_ids))
            .all(state.db())
            .await?
        {
            products.insert(
                product.id,
                PromotedProduct {
                    id: product.id,
                    name: product.name,
                    price: product.price,
                    image: product.image,
                },
            );
        }
    }

    let items: Vec<BannerWithProduct> = banners
        .into_iter()
        .map(|banner| BannerWithProduct {
            product: products.get(&banner.product_id).cloned(),
            banner: Banner::from(banner),
        })
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Banners", BannerList { items }, Some(meta)))
}

pub async fn create_banner(
    state: &AppState,
    user: &AuthUser,
    payload: CreateBannerRequest,
) -> AppResult<ApiResponse<Banner>> {
    ensure_admin(user)?;
    let mut errors = FieldErrors::new();
    validation::check_not_blank(&mut errors, "name", &payload.name);
    errors.into_result()?;
    ensure_product(state, payload.product_id).await?;

    let banner = BannerActive {
        id: NotSet,
        product_id: Set(payload.product_id),
        name: Set(payload.name.trim().to_string()),
        description: Set(payload.description),
        image: Set(payload.image),
        created_at: NotSet,
    }
    .insert(state.db())
    .await?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "banner_create",
        "banners",
        serde_json::json!({ "banner_id": banner.id, "product_id": banner.product_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Banner created",
        Banner::from(banner),
        Some(Meta::empty()),
    ))
}

pub async fn update_banner(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateBannerRequest,
) -> AppResult<ApiResponse<Banner>> {
    ensure_admin(user)?;
    let existing = Banners::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: BannerActive = existing.into();
    if let Some(name) = payload.name {
        let mut errors = FieldErrors::new();
        validation::check_not_blank(&mut errors, "name", &name);
        errors.into_result()?;
        active.name = Set(name.trim().to_string());
    }
    if let Some(product_id) = payload.product_id {
        ensure_product(state, product_id).await?;
        active.product_id = Set(product_id);
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    if let Some(image) = payload.image {
        active.image = Set(Some(image));
    }
    let banner = active.update(state.db()).await?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "banner_update",
        "banners",
        serde_json::json!({ "banner_id": banner.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        Banner::from(banner),
        Some(Meta::empty()),
    ))
}

pub async fn delete_banner(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Banners::delete_by_id(id).exec(state.db()).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        state.db(),
        Some(user.user_id),
        "banner_delete",
        "banners",
        serde_json::json!({ "banner_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

async fn ensure_product(state: &AppState, product_id: i32) -> AppResult<()> {
    if Products::find_by_id(product_id).one(state.db()).await?.is_none() {
        return Err(AppError::BadRequest("Product not found".into()));
    }
    Ok(())
}

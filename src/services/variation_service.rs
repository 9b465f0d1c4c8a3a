use std::collections::HashMap;

use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    audit,
    dto::variations::{
        CreateVariationOptionRequest, CreateVariationRequest, VariationList, VariationWithOptions,
    },
    entity::{
        categories::Entity as Categories,
        variation_options::{ActiveModel as OptionActive, Column as OptionCol, Entity as VariationOptions},
        variations::{ActiveModel as VariationActive, Column as VariationCol, Entity as Variations},
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{Variation, VariationOption},
    response::{ApiResponse, Meta},
    routes::params::VariationQuery,
    state::AppState,
    validation::{self, FieldErrors},
};

pub async fn list_variations(
    state: &AppState,
    query: VariationQuery,
) -> AppResult<ApiResponse<VariationList>> {
    let mut finder = Variations::find().order_by_asc(VariationCol::Id);
    if let Some(category_id) = query.category_id {
        finder = finder.filter(VariationCol::CategoryId.eq(category_id));
    }
    let variations = finder.all(state.db()).await?;

    let ids: Vec<i32> = variations.iter().map(|v| v.id).collect();
    let mut options: HashMap<i32, Vec<VariationOption>> = HashMap::new();
    if !ids.is_empty() {
        for option in VariationOptions::find()
            .filter(OptionCol::VariationId.is_in(ids))
            .order_by_asc(OptionCol::Id)
            .all(state.db())
            .await?
        {
            options
                .entry(option.variation_id)
                .or_default()
                .push(VariationOption::from(option));
        }
    }

    let items: Vec<VariationWithOptions> = variations
        .into_iter()
        .map(|variation| VariationWithOptions {
            options: options.remove(&variation.id).unwrap_or_default(),
            id: variation.id,
            category_id: variation.category_id,
            name: variation.name,
        })
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Variations", VariationList { items }, Some(meta)))
}

pub async fn create_variation(
    state: &AppState,
    user: &AuthUser,
    payload: CreateVariationRequest,
) -> AppResult<ApiResponse<Variation>> {
    ensure_admin(user)?;
    let mut errors = FieldErrors::new();
    validation::check_not_blank(&mut errors, "name", &payload.name);
    errors.into_result()?;

    if Categories::find_by_id(payload.category_id)
        .one(state.db())
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest("Category not found".into()));
    }

    let variation = VariationActive {
        id: NotSet,
        category_id: Set(payload.category_id),
        name: Set(payload.name.trim().to_string()),
        created_at: NotSet,
    }
    .insert(state.db())
    .await?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "variation_create",
        "variations",
        serde_json::json!({ "variation_id": variation.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Variation created",
        Variation::from(variation),
        Some(Meta::empty()),
    ))
}

pub async fn delete_variation(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Variations::delete_by_id(id).exec(state.db()).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        state.db(),
        Some(user.user_id),
        "variation_delete",
        "variations",
        serde_json::json!({ "variation_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn create_option(
    state: &AppState,
    user: &AuthUser,
    variation_id: i32,
    payload: CreateVariationOptionRequest,
) -> AppResult<ApiResponse<VariationOption>> {
    ensure_admin(user)?;
    let mut errors = FieldErrors::new();
    validation::check_not_blank(&mut errors, "value", &payload.value);
    errors.into_result()?;

    if Variations::find_by_id(variation_id)
        .one(state.db())
        .await?
        .is_none()
    {
        return Err(AppError::NotFound);
    }

    let option = OptionActive {
        id: NotSet,
        variation_id: Set(variation_id),
        value: Set(payload.value.trim().to_string()),
        created_at: NotSet,
    }
    .insert(state.db())
    .await?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "variation_option_create",
        "variation_options",
        serde_json::json!({ "variation_option_id": option.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Variation option created",
        VariationOption::from(option),
        Some(Meta::empty()),
    ))
}

pub async fn delete_option(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = VariationOptions::delete_by_id(id).exec(state.db()).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        state.db(),
        Some(user.user_id),
        "variation_option_delete",
        "variation_options",
        serde_json::json!({ "variation_option_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

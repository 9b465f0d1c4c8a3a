use std::collections::HashMap;

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::{
    audit,
    dto::cart::{AddToCartRequest, CartItemDto, CartList, UpdateCartQuantityRequest, line_total},
    entity::{
        cart_items::{ActiveModel as CartActive, Column as CartCol, Entity as CartItems},
        product_items::Entity as ProductItems,
        products::{Column as ProdCol, Entity as Products},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{CartItem, ProductItem},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_cart(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<CartList>> {
    let rows = CartItems::find()
        .filter(CartCol::UserId.eq(user.user_id))
        .order_by_desc(CartCol::CreatedAt)
        .order_by_desc(CartCol::Id)
        .find_also_related(ProductItems)
        .all(state.db())
        .await?;

    let product_ids: Vec<i32> = rows
        .iter()
        .filter_map(|(_, item)| item.as_ref().map(|i| i.product_id))
        .collect();
    let names: HashMap<i32, String> = if product_ids.is_empty() {
        HashMap::new()
    } else {
        Products::find()
            .filter(ProdCol::Id.is_in(product_ids))
            .all(state.db())
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect()
    };

    let lines: Vec<CartItemDto> = rows
        .into_iter()
        .filter_map(|(cart, item)| {
            let item = item?;
            Some(CartItemDto {
                id: cart.id,
                quantity: cart.quantity,
                product_name: names.get(&item.product_id).cloned().unwrap_or_default(),
                line_total: line_total(item.price, cart.quantity),
                item: ProductItem::from(item),
            })
        })
        .collect();

    let meta = Meta::total(lines.len());
    Ok(ApiResponse::success("OK", CartList::from_lines(lines), Some(meta)))
}

fn check_quantity(quantity: i32) -> AppResult<()> {
    if quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

pub async fn add_to_cart(
    state: &AppState,
    user: &AuthUser,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartItem>> {
    check_quantity(payload.quantity)?;

    let item_exist = ProductItems::find_by_id(payload.product_item_id)
        .one(state.db())
        .await?;
    if item_exist.is_none() {
        return Err(AppError::BadRequest("product item not found".to_string()));
    }

    let cart_item = CartItems::insert(CartActive {
        id: NotSet,
        user_id: Set(user.user_id),
        product_item_id: Set(payload.product_item_id),
        quantity: Set(payload.quantity),
        created_at: NotSet,
    })
    .on_conflict(
        OnConflict::columns([CartCol::UserId, CartCol::ProductItemId])
            .update_column(CartCol::Quantity)
            .to_owned(),
    )
    .exec_with_returning(state.db())
    .await?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "cart_update",
        "cart_items",
        serde_json::json!({ "product_item_id": payload.product_item_id, "quantity": payload.quantity }),
    )
    .await;

    Ok(ApiResponse::success("OK", CartItem::from(cart_item), None))
}

pub async fn update_quantity(
    state: &AppState,
    user: &AuthUser,
    product_item_id: i32,
    payload: UpdateCartQuantityRequest,
) -> AppResult<ApiResponse<CartItem>> {
    check_quantity(payload.quantity)?;

    let existing = CartItems::find()
        .filter(
            Condition::all()
                .add(CartCol::UserId.eq(user.user_id))
                .add(CartCol::ProductItemId.eq(product_item_id)),
        )
        .one(state.db())
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: CartActive = existing.into();
    active.quantity = Set(payload.quantity);
    let cart_item = active.update(state.db()).await?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "cart_update",
        "cart_items",
        serde_json::json!({ "product_item_id": product_item_id, "quantity": cart_item.quantity }),
    )
    .await;

    Ok(ApiResponse::success("OK", CartItem::from(cart_item), None))
}

pub async fn remove_from_cart(
    state: &AppState,
    user: &AuthUser,
    product_item_id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = CartItems::delete_many()
        .filter(
            Condition::all()
                .add(CartCol::ProductItemId.eq(product_item_id))
                .add(CartCol::UserId.eq(user.user_id)),
        )
        .exec(state.db())
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        state.db(),
        Some(user.user_id),
        "cart_remove",
        "cart_items",
        serde_json::json!({ "product_item_id": product_item_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Removed from cart",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn clear_cart(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = CartItems::delete_many()
        .filter(CartCol::UserId.eq(user.user_id))
        .exec(state.db())
        .await?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "cart_clear",
        "cart_items",
        serde_json::json!({ "removed": result.rows_affected }),
    )
    .await;

    Ok(ApiResponse::success(
        "Cart cleared",
        serde_json::json!({ "removed": result.rows_affected }),
        Some(Meta::empty()),
    ))
}

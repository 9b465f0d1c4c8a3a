use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::{
    audit,
    dto::users::{CreateAddressRequest, UpdateProfileRequest, UserList},
    entity::{
        addresses::{ActiveModel as AddressActive, Column as AddressCol, Entity as Addresses},
        users::{ActiveModel as UserActive, Column as UserCol, Entity as Users, Model as UserModel},
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin, ensure_self_or_admin},
    models::{Address, User, UserProfile},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::auth_service,
    state::AppState,
    validation::{self, FieldErrors},
};

pub async fn get_profile(
    state: &AppState,
    user: &AuthUser,
    user_id: i32,
) -> AppResult<ApiResponse<UserProfile>> {
    ensure_self_or_admin(user, user_id)?;
    let model = find_user(state, user_id).await?;
    let profile = load_profile(state, model).await?;
    Ok(ApiResponse::success("Profile", profile, Some(Meta::empty())))
}

/// Checks an update against the profile form rules. Only supplied fields are checked.
pub fn validate_profile_update(payload: &UpdateProfileRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if let Some(fullname) = payload.fullname.as_deref() {
        validation::check_fullname(&mut errors, fullname);
    }
    if let Some(email) = payload.email.as_deref() {
        validation::check_email(&mut errors, email.trim());
    }
    if let Some(phone) = payload.phone_number.as_deref() {
        validation::check_phone(&mut errors, phone.trim());
    }
    errors.into_result()
}

pub async fn update_profile(
    state: &AppState,
    user: &AuthUser,
    user_id: i32,
    payload: UpdateProfileRequest,
) -> AppResult<ApiResponse<UserProfile>> {
    ensure_self_or_admin(user, user_id)?;
    validate_profile_update(&payload)?;

    let existing = find_user(state, user_id).await?;

    if let Some(email) = payload.email.as_deref() {
        let email = email.trim().to_lowercase();
        let taken = Users::find()
            .filter(
                Condition::all()
                    .add(UserCol::Email.eq(email.as_str()))
                    .add(UserCol::Id.ne(user_id)),
            )
            .one(state.db())
            .await?;
        if taken.is_some() {
            let mut errors = FieldErrors::new();
            errors.add("email", "email is already taken");
            return Err(errors.into());
        }
    }

    let mut active: UserActive = existing.into();
    if let Some(fullname) = payload.fullname {
        active.fullname = Set(fullname.trim().to_string());
    }
    if let Some(email) = payload.email {
        active.email = Set(email.trim().to_lowercase());
    }
    if let Some(phone) = payload.phone_number {
        active.phone_number = Set(Some(phone.trim().to_string()));
    }
    let updated = active
        .update(state.db())
        .await
        .map_err(auth_service::email_conflict)?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "profile_update",
        "users",
        serde_json::json!({ "user_id": updated.id }),
    )
    .await;

    let profile = load_profile(state, updated).await?;
    Ok(ApiResponse::success("Profile updated", profile, Some(Meta::empty())))
}

pub async fn list_users(
    state: &AppState,
    user: &AuthUser,
    pagination: Pagination,
) -> AppResult<ApiResponse<UserList>> {
    ensure_admin(user)?;
    let (page, limit, offset) = pagination.normalize();

    let finder = Users::find().order_by_asc(UserCol::Id);
    let total = finder.clone().count(state.db()).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(state.db())
        .await?
        .into_iter()
        .map(User::from)
        .collect();

    Ok(ApiResponse::success(
        "Users",
        UserList { items },
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn add_address(
    state: &AppState,
    user: &AuthUser,
    user_id: i32,
    payload: CreateAddressRequest,
) -> AppResult<ApiResponse<Address>> {
    ensure_self_or_admin(user, user_id)?;

    let mut errors = FieldErrors::new();
    validation::check_not_blank(&mut errors, "street", &payload.street);
    validation::check_not_blank(&mut errors, "region", &payload.region);
    validation::check_not_blank(&mut errors, "district", &payload.district);
    errors.into_result()?;

    find_user(state, user_id).await?;

    let address = AddressActive {
        id: NotSet,
        user_id: Set(user_id),
        street: Set(payload.street.trim().to_string()),
        region: Set(payload.region.trim().to_string()),
        district: Set(payload.district.trim().to_string()),
        created_at: NotSet,
    }
    .insert(state.db())
    .await?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "address_add",
        "addresses",
        serde_json::json!({ "user_id": user_id, "address_id": address.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Address added",
        Address::from(address),
        Some(Meta::empty()),
    ))
}

pub async fn remove_address(
    state: &AppState,
    user: &AuthUser,
    user_id: i32,
    address_id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_self_or_admin(user, user_id)?;

    let result = Addresses::delete_many()
        .filter(
            Condition::all()
                .add(AddressCol::Id.eq(address_id))
                .add(AddressCol::UserId.eq(user_id)),
        )
        .exec(state.db())
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        state.db(),
        Some(user.user_id),
        "address_remove",
        "addresses",
        serde_json::json!({ "user_id": user_id, "address_id": address_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Address removed",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

async fn find_user(state: &AppState, user_id: i32) -> AppResult<UserModel> {
    Users::find_by_id(user_id)
        .one(state.db())
        .await?
        .ok_or(AppError::NotFound)
}

async fn load_profile(state: &AppState, user: UserModel) -> AppResult<UserProfile> {
    let address = Addresses::find()
        .filter(AddressCol::UserId.eq(user.id))
        .order_by_asc(AddressCol::Id)
        .all(state.db())
        .await?
        .into_iter()
        .map(Address::from)
        .collect();
    Ok(UserProfile::new(user, address))
}

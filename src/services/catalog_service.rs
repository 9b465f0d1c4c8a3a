use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::{
    audit,
    dto::catalog::{
        BrandList, CategoryList, ColorList, CreateBrandRequest, CreateCategoryRequest,
        CreateColorRequest, UpdateBrandRequest, UpdateCategoryRequest,
    },
    entity::{
        brands::{ActiveModel as BrandActive, Column as BrandCol, Entity as Brands},
        categories::{ActiveModel as CategoryActive, Column as CategoryCol, Entity as Categories},
        colors::{ActiveModel as ColorActive, Column as ColorCol, Entity as Colors},
        product_items::{Column as ItemCol, Entity as ProductItems},
        products::{Column as ProductCol, Entity as Products},
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{Brand, Category, Color},
    response::{ApiResponse, Meta},
    state::AppState,
    validation::{self, FieldErrors},
};

pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let items: Vec<Category> = Categories::find()
        .order_by_asc(CategoryCol::Id)
        .all(state.db())
        .await?
        .into_iter()
        .map(Category::from)
        .collect();
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Categories", CategoryList { items }, Some(meta)))
}

pub async fn get_category(state: &AppState, id: i32) -> AppResult<ApiResponse<Category>> {
    let category = Categories::find_by_id(id)
        .one(state.db())
        .await?
        .map(Category::from)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Category", category, None))
}

pub async fn create_category(
    state: &AppState,
    user: &AuthUser,
    payload: CreateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    ensure_admin(user)?;
    let name = required_name(&payload.name)?;
    ensure_category_name_free(state, &name, None).await?;

    let category = CategoryActive {
        id: NotSet,
        name: Set(name),
        image: Set(payload.image),
        icon: Set(payload.icon),
        created_at: NotSet,
    }
    .insert(state.db())
    .await?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "category_create",
        "categories",
        serde_json::json!({ "category_id": category.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Category created",
        Category::from(category),
        Some(Meta::empty()),
    ))
}

pub async fn update_category(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    ensure_admin(user)?;
    let existing = Categories::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: CategoryActive = existing.into();
    if let Some(name) = payload.name {
        let name = required_name(&name)?;
        ensure_category_name_free(state, &name, Some(id)).await?;
        active.name = Set(name);
    }
    if let Some(image) = payload.image {
        active.image = Set(Some(image));
    }
    if let Some(icon) = payload.icon {
        active.icon = Set(Some(icon));
    }
    let category = active.update(state.db()).await?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "category_update",
        "categories",
        serde_json::json!({ "category_id": category.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        Category::from(category),
        Some(Meta::empty()),
    ))
}

pub async fn delete_category(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let dependants = Products::find()
        .filter(ProductCol::CategoryId.eq(id))
        .count(state.db())
        .await?;
    if dependants > 0 {
        return Err(AppError::BadRequest("Category still has products".into()));
    }
    let result = Categories::delete_by_id(id).exec(state.db()).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        state.db(),
        Some(user.user_id),
        "category_delete",
        "categories",
        serde_json::json!({ "category_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn list_brands(state: &AppState) -> AppResult<ApiResponse<BrandList>> {
    let items: Vec<Brand> = Brands::find()
        .order_by_asc(BrandCol::Id)
        .all(state.db())
        .await?
        .into_iter()
        .map(Brand::from)
        .collect();
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Brands", BrandList { items }, Some(meta)))
}

pub async fn get_brand(state: &AppState, id: i32) -> AppResult<ApiResponse<Brand>> {
    let brand = Brands::find_by_id(id)
        .one(state.db())
        .await?
        .map(Brand::from)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Brand", brand, None))
}

pub async fn create_brand(
    state: &AppState,
    user: &AuthUser,
    payload: CreateBrandRequest,
) -> AppResult<ApiResponse<Brand>> {
    ensure_admin(user)?;
    let name = required_name(&payload.name)?;
    ensure_brand_name_free(state, &name, None).await?;

    let brand = BrandActive {
        id: NotSet,
        name: Set(name),
        image: Set(payload.image),
        created_at: NotSet,
    }
    .insert(state.db())
    .await?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "brand_create",
        "brands",
        serde_json::json!({ "brand_id": brand.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Brand created",
        Brand::from(brand),
        Some(Meta::empty()),
    ))
}

pub async fn update_brand(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateBrandRequest,
) -> AppResult<ApiResponse<Brand>> {
    ensure_admin(user)?;
    let existing = Brands::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: BrandActive = existing.into();
    if let Some(name) = payload.name {
        let name = required_name(&name)?;
        ensure_brand_name_free(state, &name, Some(id)).await?;
        active.name = Set(name);
    }
    if let Some(image) = payload.image {
        active.image = Set(Some(image));
    }
    let brand = active.update(state.db()).await?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "brand_update",
        "brands",
        serde_json::json!({ "brand_id": brand.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        Brand::from(brand),
        Some(Meta::empty()),
    ))
}

pub async fn delete_brand(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let dependants = Products::find()
        .filter(ProductCol::BrandId.eq(id))
        .count(state.db())
        .await?;
    if dependants > 0 {
        return Err(AppError::BadRequest("Brand still has products".into()));
    }
    let result = Brands::delete_by_id(id).exec(state.db()).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        state.db(),
        Some(user.user_id),
        "brand_delete",
        "brands",
        serde_json::json!({ "brand_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn list_colors(state: &AppState) -> AppResult<ApiResponse<ColorList>> {
    let items: Vec<Color> = Colors::find()
        .order_by_asc(ColorCol::Id)
        .all(state.db())
        .await?
        .into_iter()
        .map(Color::from)
        .collect();
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Colors", ColorList { items }, Some(meta)))
}

pub async fn create_color(
    state: &AppState,
    user: &AuthUser,
    payload: CreateColorRequest,
) -> AppResult<ApiResponse<Color>> {
    ensure_admin(user)?;
    let mut errors = FieldErrors::new();
    validation::check_not_blank(&mut errors, "name", &payload.name);
    validation::check_color_code(&mut errors, payload.color_code.trim());
    errors.into_result()?;

    let color = ColorActive {
        id: NotSet,
        name: Set(payload.name.trim().to_string()),
        color_code: Set(payload.color_code.trim().to_uppercase()),
        created_at: NotSet,
    }
    .insert(state.db())
    .await?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "color_create",
        "colors",
        serde_json::json!({ "color_id": color.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Color created",
        Color::from(color),
        Some(Meta::empty()),
    ))
}

pub async fn delete_color(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let dependants = ProductItems::find()
        .filter(ItemCol::ColorId.eq(id))
        .count(state.db())
        .await?;
    if dependants > 0 {
        return Err(AppError::BadRequest("Color is used by product items".into()));
    }
    let result = Colors::delete_by_id(id).exec(state.db()).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        state.db(),
        Some(user.user_id),
        "color_delete",
        "colors",
        serde_json::json!({ "color_id": id }),
    )
    .await;
    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn required_name(name: &str) -> Result<String, FieldErrors> {
    let mut errors = FieldErrors::new();
    validation::check_not_blank(&mut errors, "name", name);
    errors.into_result()?;
    Ok(name.trim().to_string())
}

async fn ensure_category_name_free(
    state: &AppState,
    name: &str,
    except: Option<i32>,
) -> AppResult<()> {
    let mut condition = Condition::all().add(CategoryCol::Name.eq(name));
    if let Some(id) = except {
        condition = condition.add(CategoryCol::Id.ne(id));
    }
    if Categories::find().filter(condition).one(state.db()).await?.is_some() {
        return Err(AppError::BadRequest("Category name is already taken".into()));
    }
    Ok(())
}

async fn ensure_brand_name_free(state: &AppState, name: &str, except: Option<i32>) -> AppResult<()> {
    let mut condition = Condition::all().add(BrandCol::Name.eq(name));
    if let Some(id) = except {
        condition = condition.add(BrandCol::Id.ne(id));
    }
    if Brands::find().filter(condition).one(state.db()).await?.is_some() {
        return Err(AppError::BadRequest("Brand name is already taken".into()));
    }
    Ok(())
}

use std::collections::HashMap;

use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::{
    audit,
    dto::products::{
        AddConfigurationRequest, ConfiguredOption, CreateProductItemRequest, CreateProductRequest,
        ProductDetail, ProductItemDetail, ProductItemList, ProductList, UpdateProductItemRequest,
        UpdateProductRequest,
    },
    entity::{
        brands::Entity as Brands,
        categories::Entity as Categories,
        colors::{Column as ColorCol, Entity as Colors},
        product_configurations::{
            ActiveModel as ConfigurationActive, Column as ConfigurationCol,
            Entity as ProductConfigurations,
        },
        product_items::{
            ActiveModel as ItemActive, Column as ItemCol, Entity as ProductItems,
            Model as ItemModel,
        },
        products::{ActiveModel, Column, Entity as Products},
        variation_options::Entity as VariationOptions,
        variations::{Column as VariationCol, Entity as Variations},
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{Brand, Category, Color, Product, ProductConfiguration, ProductItem},
    response::{ApiResponse, Meta},
    routes::params::{ProductQuery, ProductSortBy, SortOrder},
    state::AppState,
    validation::{self, FieldErrors},
};

/// Makes `%`, `_` and `\` in user search text match literally.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

pub fn product_filter(query: &ProductQuery) -> Condition {
    let mut condition = Condition::all();

    if let Some(search) = query.q.as_ref().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", escape_like(search));
        condition = condition.add(
            Condition::any()
                .add(Expr::col(Column::Name).ilike(LikeExpr::new(pattern.clone()).escape('\\')))
                .add(Expr::col(Column::Description).ilike(LikeExpr::new(pattern).escape('\\'))),
        );
    }
    if let Some(category_id) = query.category_id {
        condition = condition.add(Column::CategoryId.eq(category_id));
    }
    if let Some(brand_id) = query.brand_id {
        condition = condition.add(Column::BrandId.eq(brand_id));
    }
    if let Some(min_price) = query.min_price {
        condition = condition.add(Column::Price.gte(min_price));
    }
    if let Some(max_price) = query.max_price {
        condition = condition.add(Column::Price.lte(max_price));
    }
    if let Some(is_aksiya) = query.is_aksiya {
        condition = condition.add(Column::IsAksiya.eq(is_aksiya));
    }

    condition
}

pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let (page, limit, offset) = query.pagination().normalize();

    let sort_col = match query.sort_by.unwrap_or_default() {
        ProductSortBy::CreatedAt => Column::CreatedAt,
        ProductSortBy::Price => Column::Price,
        ProductSortBy::Name => Column::Name,
        ProductSortBy::Rating => Column::Rating,
    };

    let mut finder = Products::find().filter(product_filter(&query));
    finder = match query.sort_order.unwrap_or_default() {
        SortOrder::Asc => finder.order_by_asc(sort_col),
        SortOrder::Desc => finder.order_by_desc(sort_col),
    };
    // Stable paging when the sort column ties.
    finder = finder.order_by_asc(Column::Id);

    let total = finder.clone().count(state.db()).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(state.db())
        .await?
        .into_iter()
        .map(Product::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<ApiResponse<ProductDetail>> {
    let product = Products::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(AppError::NotFound)?;

    let category = Categories::find_by_id(product.category_id)
        .one(state.db())
        .await?
        .map(Category::from);
    let brand = Brands::find_by_id(product.brand_id)
        .one(state.db())
        .await?
        .map(Brand::from);

    let items = ProductItems::find()
        .filter(ItemCol::ProductId.eq(product.id))
        .order_by_asc(ItemCol::Id)
        .all(state.db())
        .await?;
    let items = item_details(state, items).await?;

    let detail = ProductDetail {
        product: Product::from(product),
        category,
        brand,
        items,
    };
    Ok(ApiResponse::success("Product", detail, None))
}

/// Attaches color and selected variation options to each SKU.
async fn item_details(state: &AppState, items: Vec<ItemModel>) -> AppResult<Vec<ProductItemDetail>> {
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let color_ids: Vec<i32> = items.iter().map(|item| item.color_id).collect();
    let colors: HashMap<i32, Color> = Colors::find()
        .filter(ColorCol::Id.is_in(color_ids))
        .all(state.db())
        .await?
        .into_iter()
        .map(|color| (color.id, Color::from(color)))
        .collect();

    let item_ids: Vec<i32> = items.iter().map(|item| item.id).collect();
    let configured = ProductConfigurations::find()
        .filter(ConfigurationCol::ProductItemId.is_in(item_ids))
        .order_by_asc(ConfigurationCol::Id)
        .find_also_related(VariationOptions)
        .all(state.db())
        .await?;

    let variation_ids: Vec<i32> = configured
        .iter()
        .filter_map(|(_, option)| option.as_ref().map(|o| o.variation_id))
        .collect();
    let variation_names: HashMap<i32, String> = if variation_ids.is_empty() {
        HashMap::new()
    } else {
        Variations::find()
            .filter(VariationCol::Id.is_in(variation_ids))
            .all(state.db())
            .await?
            .into_iter()
            .map(|variation| (variation.id, variation.name))
            .collect()
    };

    let mut options_by_item: HashMap<i32, Vec<ConfiguredOption>> = HashMap::new();
    for (configuration, option) in configured {
        let Some(option) = option else { continue };
        options_by_item
            .entry(configuration.product_item_id)
            .or_default()
            .push(ConfiguredOption {
                id: option.id,
                variation_id: option.variation_id,
                variation: variation_names
                    .get(&option.variation_id)
                    .cloned()
                    .unwrap_or_default(),
                value: option.value,
            });
    }

    Ok(items
        .into_iter()
        .map(|item| ProductItemDetail {
            color: colors.get(&item.color_id).cloned(),
            options: options_by_item.remove(&item.id).unwrap_or_default(),
            item: ProductItem::from(item),
        })
        .collect())
}

pub fn validate_product(name: &str, price: i64, rating: i32) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    validation::check_not_blank(&mut errors, "name", name);
    validation::check_price(&mut errors, price);
    validation::check_rating(&mut errors, rating);
    errors.into_result()
}

pub async fn create_product(
    state: &AppState,
    user: &AuthUser,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    ensure_admin(user)?;
    validate_product(&payload.name, payload.price, payload.rating)?;
    ensure_category_and_brand(state, payload.category_id, payload.brand_id).await?;

    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name.trim().to_string()),
        description: Set(payload.description),
        summary: Set(payload.summary),
        nasiya: Set(payload.nasiya),
        price: Set(payload.price),
        rating: Set(payload.rating),
        is_aksiya: Set(payload.is_aksiya),
        image: Set(payload.image),
        category_id: Set(payload.category_id),
        brand_id: Set(payload.brand_id),
        created_at: NotSet,
    };
    let product = active.insert(state.db()).await?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "product_create",
        "products",
        serde_json::json!({ "product_id": product.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Product created",
        Product::from(product),
        Some(Meta::empty()),
    ))
}

pub async fn update_product(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    ensure_admin(user)?;
    let existing = Products::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(AppError::NotFound)?;

    validate_product(
        payload.name.as_deref().unwrap_or(&existing.name),
        payload.price.unwrap_or(existing.price),
        payload.rating.unwrap_or(existing.rating),
    )?;
    ensure_category_and_brand(
        state,
        payload.category_id.unwrap_or(existing.category_id),
        payload.brand_id.unwrap_or(existing.brand_id),
    )
    .await?;

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    if let Some(summary) = payload.summary {
        active.summary = Set(Some(summary));
    }
    if let Some(nasiya) = payload.nasiya {
        active.nasiya = Set(Some(nasiya));
    }
    if let Some(price) = payload.price {
        active.price = Set(price);
    }
    if let Some(rating) = payload.rating {
        active.rating = Set(rating);
    }
    if let Some(is_aksiya) = payload.is_aksiya {
        active.is_aksiya = Set(is_aksiya);
    }
    if let Some(image) = payload.image {
        active.image = Set(Some(image));
    }
    if let Some(category_id) = payload.category_id {
        active.category_id = Set(category_id);
    }
    if let Some(brand_id) = payload.brand_id {
        active.brand_id = Set(brand_id);
    }

    let product = active.update(state.db()).await?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "product_update",
        "products",
        serde_json::json!({ "product_id": product.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        Product::from(product),
        Some(Meta::empty()),
    ))
}

pub async fn delete_product(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Products::delete_by_id(id).exec(state.db()).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        state.db(),
        Some(user.user_id),
        "product_delete",
        "products",
        serde_json::json!({ "product_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn list_items(state: &AppState, product_id: i32) -> AppResult<ApiResponse<ProductItemList>> {
    if Products::find_by_id(product_id).one(state.db()).await?.is_none() {
        return Err(AppError::NotFound);
    }
    let items: Vec<ProductItem> = ProductItems::find()
        .filter(ItemCol::ProductId.eq(product_id))
        .order_by_asc(ItemCol::Id)
        .all(state.db())
        .await?
        .into_iter()
        .map(ProductItem::from)
        .collect();
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Product items", ProductItemList { items }, Some(meta)))
}

pub async fn create_item(
    state: &AppState,
    user: &AuthUser,
    product_id: i32,
    payload: CreateProductItemRequest,
) -> AppResult<ApiResponse<ProductItem>> {
    ensure_admin(user)?;
    let mut errors = FieldErrors::new();
    validation::check_price(&mut errors, payload.price);
    errors.into_result()?;

    if Products::find_by_id(product_id).one(state.db()).await?.is_none() {
        return Err(AppError::NotFound);
    }
    ensure_color(state, payload.color_id).await?;

    let item = ItemActive {
        id: NotSet,
        product_id: Set(product_id),
        color_id: Set(payload.color_id),
        price: Set(payload.price),
        image: Set(payload.image),
        created_at: NotSet,
    }
    .insert(state.db())
    .await?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "product_item_create",
        "product_items",
        serde_json::json!({ "product_id": product_id, "product_item_id": item.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Product item created",
        ProductItem::from(item),
        Some(Meta::empty()),
    ))
}

pub async fn update_item(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateProductItemRequest,
) -> AppResult<ApiResponse<ProductItem>> {
    ensure_admin(user)?;
    let existing = ProductItems::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ItemActive = existing.into();
    if let Some(price) = payload.price {
        let mut errors = FieldErrors::new();
        validation::check_price(&mut errors, price);
        errors.into_result()?;
        active.price = Set(price);
    }
    if let Some(color_id) = payload.color_id {
        ensure_color(state, color_id).await?;
        active.color_id = Set(color_id);
    }
    if let Some(image) = payload.image {
        active.image = Set(Some(image));
    }
    let item = active.update(state.db()).await?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "product_item_update",
        "product_items",
        serde_json::json!({ "product_item_id": item.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        ProductItem::from(item),
        Some(Meta::empty()),
    ))
}

pub async fn delete_item(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = ProductItems::delete_by_id(id).exec(state.db()).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        state.db(),
        Some(user.user_id),
        "product_item_delete",
        "product_items",
        serde_json::json!({ "product_item_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn add_configuration(
    state: &AppState,
    user: &AuthUser,
    item_id: i32,
    payload: AddConfigurationRequest,
) -> AppResult<ApiResponse<ProductConfiguration>> {
    ensure_admin(user)?;
    if ProductItems::find_by_id(item_id).one(state.db()).await?.is_none() {
        return Err(AppError::NotFound);
    }
    if VariationOptions::find_by_id(payload.variation_option_id)
        .one(state.db())
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest("Variation option not found".into()));
    }

    let existing = ProductConfigurations::find()
        .filter(
            Condition::all()
                .add(ConfigurationCol::ProductItemId.eq(item_id))
                .add(ConfigurationCol::VariationOptionId.eq(payload.variation_option_id)),
        )
        .one(state.db())
        .await?;
    if existing.is_some() {
        return Err(AppError::BadRequest(
            "Option is already configured for this item".into(),
        ));
    }

    let configuration = ConfigurationActive {
        id: NotSet,
        product_item_id: Set(item_id),
        variation_option_id: Set(payload.variation_option_id),
        created_at: NotSet,
    }
    .insert(state.db())
    .await?;

    audit::record(
        state.db(),
        Some(user.user_id),
        "product_configuration_add",
        "product_configurations",
        serde_json::json!({ "product_configuration_id": configuration.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Configuration added",
        ProductConfiguration::from(configuration),
        Some(Meta::empty()),
    ))
}

pub async fn remove_configuration(
    state: &AppState,
    user: &AuthUser,
    item_id: i32,
    option_id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = ProductConfigurations::delete_many()
        .filter(
            Condition::all()
                .add(ConfigurationCol::ProductItemId.eq(item_id))
                .add(ConfigurationCol::VariationOptionId.eq(option_id)),
        )
        .exec(state.db())
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        state.db(),
        Some(user.user_id),
        "product_configuration_remove",
        "product_configurations",
        serde_json::json!({ "product_item_id": item_id, "variation_option_id": option_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Configuration removed",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

async fn ensure_category_and_brand(state: &AppState, category_id: i32, brand_id: i32) -> AppResult<()> {
    if Categories::find_by_id(category_id).one(state.db()).await?.is_none() {
        return Err(AppError::BadRequest("Category not found".into()));
    }
    if Brands::find_by_id(brand_id).one(state.db()).await?.is_none() {
        return Err(AppError::BadRequest("Brand not found".into()));
    }
    Ok(())
}

async fn ensure_color(state: &AppState, color_id: i32) -> AppResult<()> {
    if Colors::find_by_id(color_id).one(state.db()).await?.is_none() {
        return Err(AppError::BadRequest("Color not found".into()));
    }
    Ok(())
}

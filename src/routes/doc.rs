use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse, RegisterRequest},
        banners::{BannerList, BannerWithProduct, CreateBannerRequest, PromotedProduct, UpdateBannerRequest},
        cart::{AddToCartRequest, CartItemDto, CartList, UpdateCartQuantityRequest},
        catalog::{
            BrandList, CategoryList, ColorList, CreateBrandRequest, CreateCategoryRequest,
            CreateColorRequest, UpdateBrandRequest, UpdateCategoryRequest,
        },
        likes::{AddLikeRequest, LikedProductList},
        products::{
            AddConfigurationRequest, ConfiguredOption, CreateProductItemRequest,
            CreateProductRequest, ProductDetail, ProductItemDetail, ProductItemList, ProductList,
            UpdateProductItemRequest, UpdateProductRequest,
        },
        users::{CreateAddressRequest, UpdateProfileRequest, UserList},
        variations::{
            CreateVariationOptionRequest, CreateVariationRequest, VariationList,
            VariationWithOptions,
        },
    },
    models::{
        Address, Banner, Brand, CartItem, Category, Color, Like, Product, ProductConfiguration,
        ProductItem, User, UserProfile, Variation, VariationOption,
    },
    response::{ApiResponse, Meta},
    routes::{auth, banners, cart, catalog, health, likes, params, products, users, variations},
    validation::FieldErrors,
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::readiness,
        auth::register,
        auth::login,
        users::current_profile,
        users::get_profile,
        users::update_profile,
        users::list_users,
        users::add_address,
        users::remove_address,
        catalog::list_categories,
        catalog::get_category,
        catalog::create_category,
        catalog::update_category,
        catalog::delete_category,
        catalog::list_brands,
        catalog::get_brand,
        catalog::create_brand,
        catalog::update_brand,
        catalog::delete_brand,
        catalog::list_colors,
        catalog::create_color,
        catalog::delete_color,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        products::list_items,
        products::create_item,
        products::update_item,
        products::delete_item,
        products::add_configuration,
        products::remove_configuration,
        variations::list_variations,
        variations::create_variation,
        variations::delete_variation,
        variations::create_option,
        variations::delete_option,
        banners::list_banners,
        banners::create_banner,
        banners::update_banner,
        banners::delete_banner,
        cart::cart_list,
        cart::add_to_cart,
        cart::update_quantity,
        cart::remove_from_cart,
        cart::clear_cart,
        likes::list_likes,
        likes::add_like,
        likes::remove_like
    ),
    components(
        schemas(
            User,
            UserProfile,
            Address,
            Category,
            Brand,
            Color,
            Product,
            ProductItem,
            ProductConfiguration,
            Variation,
            VariationOption,
            Banner,
            CartItem,
            Like,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            UpdateProfileRequest,
            CreateAddressRequest,
            UserList,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            CreateBrandRequest,
            UpdateBrandRequest,
            CreateColorRequest,
            CategoryList,
            BrandList,
            ColorList,
            CreateProductRequest,
            UpdateProductRequest,
            CreateProductItemRequest,
            UpdateProductItemRequest,
            AddConfigurationRequest,
            ProductList,
            ProductItemList,
            ProductDetail,
            ProductItemDetail,
            ConfiguredOption,
            CreateVariationRequest,
            CreateVariationOptionRequest,
            VariationWithOptions,
            VariationList,
            CreateBannerRequest,
            UpdateBannerRequest,
            PromotedProduct,
            BannerWithProduct,
            BannerList,
            AddToCartRequest,
            UpdateCartQuantityRequest,
            CartItemDto,
            CartList,
            AddLikeRequest,
            LikedProductList,
            FieldErrors,
            health::HealthData,
            params::Pagination,
            params::ProductQuery,
            params::ProductSortBy,
            params::SortOrder,
            Meta,
            ApiResponse<UserProfile>,
            ApiResponse<ProductList>,
            ApiResponse<ProductDetail>,
            ApiResponse<CartList>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Users", description = "Profile and address endpoints"),
        (name = "Catalog", description = "Category, brand and color endpoints"),
        (name = "Products", description = "Product, item and configuration endpoints"),
        (name = "Variations", description = "Variation endpoints"),
        (name = "Banners", description = "Banner endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Likes", description = "Like endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, RegisterRequestDto};
use crate::modules::cart::model::{CartItem, CartResponse, ReplaceCartDto};
use crate::modules::categories::model::{Category, CreateCategoryDto, UpdateCategoryDto};
use crate::modules::dashboard::model::DashboardStats;
use crate::modules::orders::model::{
    Order, OrderFilterParams, OrderItemResponse, OrderResponse, OrderStatus,
    PaginatedOrdersResponse, PlaceOrderDto, PlaceOrderItemDto, UpdateOrderStatusDto,
};
use crate::modules::products::model::{
    CreateProductDto, PaginatedProductsResponse, Product, ProductFilterParams, UpdateProductDto,
};
use crate::modules::promotions::model::{CreatePromotionDto, Promotion};
use crate::modules::reviews::model::{CreateReviewDto, Review, ReviewWithAuthor};
use crate::modules::users::model::{
    AdminUpdateUserDto, PaginatedUsersResponse, UpdateProfileDto, UserFilterParams, UserResponse,
    UserRole,
};
use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::get_profile,
        crate::modules::users::controller::update_profile,
        crate::modules::users::controller::list_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::update_user,
        crate::modules::products::controller::list_products,
        crate::modules::products::controller::get_featured_products,
        crate::modules::products::controller::get_product,
        crate::modules::products::controller::create_product,
        crate::modules::products::controller::update_product,
        crate::modules::products::controller::delete_product,
        crate::modules::categories::controller::list_categories,
        crate::modules::categories::controller::create_category,
        crate::modules::categories::controller::update_category,
        crate::modules::categories::controller::delete_category,
        crate::modules::cart::controller::get_cart,
        crate::modules::cart::controller::replace_cart,
        crate::modules::orders::controller::place_order,
        crate::modules::orders::controller::list_my_orders,
        crate::modules::orders::controller::get_my_order,
        crate::modules::orders::controller::admin_list_orders,
        crate::modules::orders::controller::admin_get_order,
        crate::modules::orders::controller::admin_update_order_status,
        crate::modules::reviews::controller::create_review,
        crate::modules::reviews::controller::get_product_reviews,
        crate::modules::promotions::controller::list_promotions,
        crate::modules::promotions::controller::create_promotion,
        crate::modules::dashboard::controller::get_dashboard,
    ),
    components(
        schemas(
            RegisterRequestDto,
            LoginRequest,
            LoginResponse,
            ErrorResponse,
            UserResponse,
            UserRole,
            UpdateProfileDto,
            AdminUpdateUserDto,
            UserFilterParams,
            PaginatedUsersResponse,
            Product,
            CreateProductDto,
            UpdateProductDto,
            ProductFilterParams,
            PaginatedProductsResponse,
            Category,
            CreateCategoryDto,
            UpdateCategoryDto,
            CartItem,
            CartResponse,
            ReplaceCartDto,
            Order,
            OrderStatus,
            OrderItemResponse,
            OrderResponse,
            PlaceOrderDto,
            PlaceOrderItemDto,
            UpdateOrderStatusDto,
            OrderFilterParams,
            PaginatedOrdersResponse,
            Review,
            ReviewWithAuthor,
            CreateReviewDto,
            Promotion,
            CreatePromotionDto,
            DashboardStats,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login endpoints"),
        (name = "Profile", description = "The authenticated user's own account"),
        (name = "Products", description = "Catalog browsing and admin product management"),
        (name = "Categories", description = "Category listing and admin management"),
        (name = "Cart", description = "Per-user cart persistence"),
        (name = "Orders", description = "Order placement and history"),
        (name = "Reviews", description = "Product reviews"),
        (name = "Promotions", description = "Admin-managed promotion codes"),
        (name = "Dashboard", description = "Admin store aggregates"),
        (name = "Admin", description = "Admin order and user management")
    ),
    info(
        title = "Shopwright API",
        version = "0.1.0",
        description = "A storefront REST API built with Rust, Axum, and PostgreSQL featuring JWT-based authentication.",
        contact(
            name = "API Support",
            email = "support@shopwright.dev"
        ),
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

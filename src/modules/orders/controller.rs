use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::orders::model::{
    Order, OrderFilterParams, OrderResponse, PaginatedOrdersResponse, PlaceOrderDto,
    UpdateOrderStatusDto,
};
use crate::modules::orders::service::OrderService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Place an order
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = PlaceOrderDto,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
#[instrument(skip(state, dto))]
pub async fn place_order(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<PlaceOrderDto>,
) -> Result<(StatusCode, Json<OrderResponse>), AppError> {
    let order = OrderService::place_order(
        &state.db,
        auth_user.user_id()?,
        auth_user.email(),
        dto,
        &state.email_config,
        state.order_config.reprice_items,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// List the caller's orders
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "Caller's orders", body = Vec<OrderResponse>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
#[instrument(skip(state))]
pub async fn list_my_orders(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let orders = OrderService::list_my_orders(&state.db, auth_user.user_id()?).await?;
    Ok(Json(orders))
}

/// Get one of the caller's orders
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order with items", body = OrderResponse),
        (status = 404, description = "Order not found or not owned by the caller", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
#[instrument(skip(state))]
pub async fn get_my_order(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = OrderService::get_my_order(&state.db, auth_user.user_id()?, id).await?;
    Ok(Json(order))
}

/// List all orders (admin)
#[utoipa::path(
    get,
    path = "/api/admin/orders",
    params(
        ("status" = Option<String>, Query, description = "Filter by status"),
        ("limit" = Option<i64>, Query, description = "Page size"),
        ("offset" = Option<i64>, Query, description = "Row offset"),
    ),
    responses(
        (status = 200, description = "Paginated orders", body = PaginatedOrdersResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn admin_list_orders(
    State(state): State<AppState>,
    Query(params): Query<OrderFilterParams>,
) -> Result<Json<PaginatedOrdersResponse>, AppError> {
    let orders = OrderService::admin_list_orders(&state.db, params).await?;
    Ok(Json(orders))
}

/// Get any order (admin)
#[utoipa::path(
    get,
    path = "/api/admin/orders/{id}",
    params(("id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order with items", body = OrderResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn admin_get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = OrderService::admin_get_order(&state.db, id).await?;
    Ok(Json(order))
}

/// Update an order's status (admin)
#[utoipa::path(
    patch,
    path = "/api/admin/orders/{id}",
    params(("id" = Uuid, Path, description = "Order id")),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Updated order", body = Order),
        (status = 400, description = "Unknown status value", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn admin_update_order_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateOrderStatusDto>,
) -> Result<Json<Order>, AppError> {
    let order = OrderService::admin_update_status(&state.db, id, dto).await?;
    Ok(Json(order))
}

use axum::{Json, extract::State};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::cart::model::{CartResponse, ReplaceCartDto};
use crate::modules::cart::service::CartService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Get the caller's cart
#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Current cart", body = CartResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
#[instrument(skip(state))]
pub async fn get_cart(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<CartResponse>, AppError> {
    let cart = CartService::get_cart(&state.db, auth_user.user_id()?).await?;
    Ok(Json(cart))
}

/// Replace the caller's cart
#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = ReplaceCartDto,
    responses(
        (status = 200, description = "Stored cart", body = CartResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
#[instrument(skip(state, dto))]
pub async fn replace_cart(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<ReplaceCartDto>,
) -> Result<Json<CartResponse>, AppError> {
    let cart = CartService::replace_cart(&state.db, auth_user.user_id()?, dto).await?;
    Ok(Json(cart))
}

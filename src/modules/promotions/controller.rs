use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::promotions::model::{CreatePromotionDto, Promotion};
use crate::modules::promotions::service::PromotionService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List promotions
#[utoipa::path(
    get,
    path = "/api/admin/promotions",
    responses(
        (status = 200, description = "All promotions", body = Vec<Promotion>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Promotions"
)]
#[instrument(skip(state))]
pub async fn list_promotions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Promotion>>, AppError> {
    let promotions = PromotionService::list_promotions(&state.db).await?;
    Ok(Json(promotions))
}

/// Create a promotion
#[utoipa::path(
    post,
    path = "/api/admin/promotions",
    request_body = CreatePromotionDto,
    responses(
        (status = 201, description = "Promotion created", body = Promotion),
        (status = 400, description = "Validation error or duplicate code", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Promotions"
)]
#[instrument(skip(state, dto))]
pub async fn create_promotion(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreatePromotionDto>,
) -> Result<(StatusCode, Json<Promotion>), AppError> {
    let promotion = PromotionService::create_promotion(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(promotion)))
}

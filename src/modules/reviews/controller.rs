use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::reviews::model::{CreateReviewDto, Review, ReviewWithAuthor};
use crate::modules::reviews::service::ReviewService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Post a review
#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = Review),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
#[instrument(skip(state, dto))]
pub async fn create_review(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateReviewDto>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    let review = ReviewService::create_review(&state.db, auth_user.user_id()?, dto).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// List a product's reviews
#[utoipa::path(
    get,
    path = "/api/products/{id}/reviews",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Reviews for the product", body = Vec<ReviewWithAuthor>)
    ),
    tag = "Reviews"
)]
#[instrument(skip(state))]
pub async fn get_product_reviews(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ReviewWithAuthor>>, AppError> {
    let reviews = ReviewService::get_product_reviews(&state.db, id).await?;
    Ok(Json(reviews))
}

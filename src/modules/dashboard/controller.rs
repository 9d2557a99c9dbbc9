use axum::{Json, extract::State};
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::dashboard::model::DashboardStats;
use crate::modules::dashboard::service::DashboardService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Store-wide aggregates
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    responses(
        (status = 200, description = "Dashboard aggregates", body = DashboardStats),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
#[instrument(skip(state))]
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, AppError> {
    let stats = DashboardService::get_stats(&state.db).await?;
    Ok(Json(stats))
}

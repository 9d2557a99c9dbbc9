use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::modules::dashboard::model::DashboardStats;
use crate::utils::errors::AppError;

pub struct DashboardService;

impl DashboardService {
    pub async fn get_stats(db: &PgPool) -> Result<DashboardStats, AppError> {
        let total_users = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await
            .map_err(AppError::database)?;

        let total_products = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(db)
            .await
            .map_err(AppError::database)?;

        let total_orders = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
            .fetch_one(db)
            .await
            .map_err(AppError::database)?;

        let pending_orders =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders WHERE status = 'pending'")
                .fetch_one(db)
                .await
                .map_err(AppError::database)?;

        let total_revenue = sqlx::query_scalar::<_, Option<Decimal>>(
            "SELECT SUM(total) FROM orders WHERE status <> 'cancelled'",
        )
        .fetch_one(db)
        .await
        .map_err(AppError::database)?
        .unwrap_or(Decimal::ZERO);

        Ok(DashboardStats {
            total_users,
            total_products,
            total_orders,
            pending_orders,
            total_revenue,
        })
    }
}

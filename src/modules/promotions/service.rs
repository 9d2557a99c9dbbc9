use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::modules::promotions::model::{CreatePromotionDto, Promotion};
use crate::utils::errors::{AppError, is_unique_violation};

pub struct PromotionService;

impl PromotionService {
    pub async fn list_promotions(db: &PgPool) -> Result<Vec<Promotion>, AppError> {
        let promotions = sqlx::query_as::<_, Promotion>(
            "SELECT id, code, discount, expiry_date, created_at FROM promotions
             ORDER BY created_at DESC",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(promotions)
    }

    pub async fn create_promotion(
        db: &PgPool,
        dto: CreatePromotionDto,
    ) -> Result<Promotion, AppError> {
        if dto.discount < Decimal::ZERO {
            return Err(AppError::bad_request("Discount cannot be negative"));
        }

        let promotion = sqlx::query_as::<_, Promotion>(
            "INSERT INTO promotions (code, discount, expiry_date)
             VALUES ($1, $2, $3)
             RETURNING id, code, discount, expiry_date, created_at",
        )
        .bind(dto.code.trim())
        .bind(dto.discount)
        .bind(dto.expiry_date)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::bad_request("Promotion code already exists")
            } else {
                AppError::database(e)
            }
        })?;

        Ok(promotion)
    }
}

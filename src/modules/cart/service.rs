use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::cart::model::{CartItem, CartResponse, ReplaceCartDto};
use crate::utils::errors::AppError;

// Cart persistence is deliberately minimal: one JSONB blob per user,
// replaced wholesale. Checkout never reads it, so there is nothing to
// reconcile.
pub struct CartService;

impl CartService {
    pub async fn get_cart(db: &PgPool, user_id: Uuid) -> Result<CartResponse, AppError> {
        let items = sqlx::query_scalar::<_, serde_json::Value>(
            "SELECT items FROM carts WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?;

        let items: Vec<CartItem> = match items {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| AppError::internal_error(format!("Corrupt cart payload: {}", e)))?,
            None => Vec::new(),
        };

        Ok(CartResponse { items })
    }

    pub async fn replace_cart(
        db: &PgPool,
        user_id: Uuid,
        dto: ReplaceCartDto,
    ) -> Result<CartResponse, AppError> {
        let payload = serde_json::to_value(&dto.items)
            .map_err(|e| AppError::internal_error(format!("Failed to encode cart: {}", e)))?;

        sqlx::query(
            "INSERT INTO carts (user_id, items, updated_at)
             VALUES ($1, $2, now())
             ON CONFLICT (user_id) DO UPDATE SET items = $2, updated_at = now()",
        )
        .bind(user_id)
        .bind(&payload)
        .execute(db)
        .await?;

        Ok(CartResponse { items: dto.items })
    }
}

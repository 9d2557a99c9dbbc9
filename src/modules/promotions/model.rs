use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Promotion {
    pub id: Uuid,
    pub code: String,
    #[schema(value_type = String)]
    pub discount: Decimal,
    pub expiry_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePromotionDto {
    #[validate(length(min = 1, message = "Promotion code is required"))]
    pub code: String,
    #[schema(value_type = String)]
    pub discount: Decimal,
    pub expiry_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_code_fails_validation() {
        let dto = CreatePromotionDto {
            code: String::new(),
            discount: Decimal::new(10, 0),
            expiry_date: Utc::now(),
        };
        assert!(dto.validate().is_err());
    }
}

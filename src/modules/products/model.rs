use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::pagination::{PaginationMeta, PaginationParams};

/// A catalog item. `attributes` is opaque structured data (sizes,
/// colors, whatever the storefront needs) stored as JSONB.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,
    pub description: Option<String>,
    pub stock: i32,
    pub category_id: Option<Uuid>,
    #[schema(value_type = Object)]
    pub attributes: serde_json::Value,
    pub image_url: Option<String>,
    pub featured: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

fn default_attributes() -> serde_json::Value {
    serde_json::json!({})
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductDto {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    #[serde(default)]
    pub stock: i32,
    pub category_id: Option<Uuid>,
    #[serde(default = "default_attributes")]
    #[schema(value_type = Object)]
    pub attributes: serde_json::Value,
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Partial update: only present fields are written.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductDto {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[schema(value_type = Option<String>, example = "12.5")]
    pub price: Option<Decimal>,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: Option<i32>,
    pub category_id: Option<Uuid>,
    #[schema(value_type = Option<Object>)]
    pub attributes: Option<serde_json::Value>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductFilterParams {
    pub category_id: Option<Uuid>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedProductsResponse {
    pub data: Vec<Product>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dto_defaults() {
        let dto: CreateProductDto =
            serde_json::from_str(r#"{"name":"Mug","price":"9.99"}"#).unwrap();
        assert_eq!(dto.stock, 0);
        assert!(!dto.featured);
        assert_eq!(dto.attributes, serde_json::json!({}));
    }

    #[test]
    fn create_dto_accepts_numeric_price() {
        let dto: CreateProductDto = serde_json::from_str(r#"{"name":"Mug","price":9.99}"#).unwrap();
        assert_eq!(dto.price, Decimal::new(999, 2));
    }

    #[test]
    fn update_dto_partial_fields() {
        let dto: UpdateProductDto = serde_json::from_str(r#"{"price":12.5}"#).unwrap();
        assert_eq!(dto.price, Some(Decimal::new(125, 1)));
        assert!(dto.name.is_none());
        assert!(dto.stock.is_none());
        assert!(dto.attributes.is_none());
    }

    #[test]
    fn create_dto_rejects_negative_stock() {
        use validator::Validate;
        let dto: CreateProductDto =
            serde_json::from_str(r#"{"name":"Mug","price":"9.99","stock":-1}"#).unwrap();
        assert!(dto.validate().is_err());
    }
}

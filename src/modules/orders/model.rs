//! Order entities and DTOs.
//!
//! An order owns its line items: they are written in the same
//! transaction and share its lifecycle. Each item records the unit
//! price at order time, decoupled from the product's live price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::products::model::Product;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

/// Closed order lifecycle. The legacy system persisted free-text
/// statuses; anything imported from it must be mapped onto this enum.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(value_type = String, example = "28.00")]
    pub total: Decimal,
    pub status: OrderStatus,
    #[schema(value_type = Object)]
    pub shipping_address: serde_json::Value,
    pub order_number: String,
    #[schema(value_type = String, example = "3.00")]
    pub delivery_fee: Decimal,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct OrderItemRow {
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub price: Decimal,
}

/// Line item as returned to callers, with its product nested.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemResponse {
    pub product_id: Uuid,
    pub quantity: i32,
    #[schema(value_type = String, example = "10.00")]
    pub price: Decimal,
    pub product: Option<Product>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(value_type = String, example = "28.00")]
    pub total: Decimal,
    pub status: OrderStatus,
    #[schema(value_type = Object)]
    pub shipping_address: serde_json::Value,
    pub order_number: String,
    #[schema(value_type = String, example = "3.00")]
    pub delivery_fee: Decimal,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub items: Vec<OrderItemResponse>,
}

/// One submitted line. The caller supplies the unit price alongside the
/// product reference; see the repricing hook in `OrderConfig`.
///
/// Serialize is load-bearing: the length check on `PlaceOrderDto.items`
/// embeds the offending value in its `ValidationError` params.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PlaceOrderItemDto {
    pub product_id: Uuid,
    #[schema(value_type = String, example = "10.00")]
    pub price: Decimal,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PlaceOrderDto {
    #[schema(value_type = Object)]
    pub shipping_address: serde_json::Value,
    #[validate(length(min = 1, message = "Order must contain at least one item"), nested)]
    pub items: Vec<PlaceOrderItemDto>,
    pub order_number: Option<String>,
    #[schema(value_type = Option<String>, example = "3.00")]
    pub delivery_fee: Option<Decimal>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusDto {
    #[validate(length(min = 1, message = "Status must not be empty"))]
    pub status: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OrderFilterParams {
    pub status: Option<OrderStatus>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedOrdersResponse {
    pub data: Vec<Order>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(OrderStatus::parse("Pending"), Some(OrderStatus::Pending));
        assert_eq!(OrderStatus::parse("SHIPPED"), Some(OrderStatus::Shipped));
        assert_eq!(OrderStatus::parse("cancelled"), Some(OrderStatus::Cancelled));
        assert_eq!(OrderStatus::parse("refunded"), None);
        assert_eq!(OrderStatus::parse(""), None);
    }

    #[test]
    fn place_order_dto_deserializes() {
        let json = r#"{
            "shipping_address": {"line1": "1 Main St", "city": "Springfield"},
            "items": [{"product_id": "5f8b1a9e-3c0d-4f6a-9a1b-2c3d4e5f6a7b", "price": 10, "quantity": 2}],
            "delivery_fee": 3
        }"#;
        let dto: PlaceOrderDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.items.len(), 1);
        assert_eq!(dto.items[0].quantity, 2);
        assert_eq!(dto.delivery_fee, Some(Decimal::from(3)));
        assert!(dto.order_number.is_none());
    }

    #[test]
    fn place_order_dto_rejects_empty_items() {
        use validator::Validate;
        let dto: PlaceOrderDto = serde_json::from_str(
            r#"{"shipping_address": {}, "items": []}"#,
        )
        .unwrap();
        let errors = dto.validate().unwrap_err();
        let items_errors = &errors.field_errors()["items"];
        assert_eq!(
            items_errors[0].message.as_deref(),
            Some("Order must contain at least one item")
        );
        // The length validator stores the rejected value in its params,
        // which exercises the item DTO's Serialize impl.
        assert!(items_errors[0].params.contains_key("value"));
    }

    #[test]
    fn place_order_dto_rejects_zero_quantity() {
        use validator::Validate;
        let dto: PlaceOrderDto = serde_json::from_str(
            r#"{"shipping_address": {}, "items": [{"product_id": "5f8b1a9e-3c0d-4f6a-9a1b-2c3d4e5f6a7b", "price": 10, "quantity": 0}]}"#,
        )
        .unwrap();
        assert!(dto.validate().is_err());
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// One line in a cart. Carts hold references only; prices are resolved
/// at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CartItem {
    pub product_id: Uuid,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReplaceCartDto {
    #[validate(nested)]
    pub items: Vec<CartItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartResponse {
    pub items: Vec<CartItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn rejects_zero_quantity() {
        let dto: ReplaceCartDto = serde_json::from_str(&format!(
            r#"{{"items":[{{"product_id":"{}","quantity":0}}]}}"#,
            Uuid::new_v4()
        ))
        .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn empty_cart_is_valid() {
        let dto: ReplaceCartDto = serde_json::from_str(r#"{"items":[]}"#).unwrap();
        assert!(dto.validate().is_ok());
    }
}

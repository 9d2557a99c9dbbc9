use std::env;

#[derive(Clone, Debug)]
pub struct OrderConfig {
    /// When true, client-submitted unit prices are replaced with the
    /// current catalog price before the order total is computed. Off by
    /// default: the recorded price is a snapshot of what the client
    /// submitted at checkout.
    pub reprice_items: bool,
}

impl OrderConfig {
    pub fn from_env() -> Self {
        Self {
            reprice_items: env::var("ORDER_REPRICE")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

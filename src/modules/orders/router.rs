use axum::{Router, routing::get};

use crate::modules::orders::controller::{
    admin_get_order, admin_list_orders, admin_update_order_status, get_my_order, list_my_orders,
    place_order,
};
use crate::state::AppState;

pub fn init_orders_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_my_orders).post(place_order))
        .route("/{id}", get(get_my_order))
}

/// Mounted under `/admin/orders`, behind the admin layer.
pub fn init_admin_orders_router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin_list_orders))
        .route("/{id}", get(admin_get_order).patch(admin_update_order_status))
}

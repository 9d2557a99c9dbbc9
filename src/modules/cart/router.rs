use axum::{Router, routing::get};

use crate::modules::cart::controller::{get_cart, replace_cart};
use crate::state::AppState;

pub fn init_cart_router() -> Router<AppState> {
    Router::new().route("/", get(get_cart).post(replace_cart))
}

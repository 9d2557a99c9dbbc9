use axum::{Router, routing::get};

use crate::modules::promotions::controller::{create_promotion, list_promotions};
use crate::state::AppState;

pub fn init_promotions_router() -> Router<AppState> {
    Router::new().route("/", get(list_promotions).post(create_promotion))
}

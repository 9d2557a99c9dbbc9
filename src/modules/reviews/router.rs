use axum::{Router, routing::post};

use crate::modules::reviews::controller::create_review;
use crate::state::AppState;

pub fn init_reviews_router() -> Router<AppState> {
    Router::new().route("/", post(create_review))
}

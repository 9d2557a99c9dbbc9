use axum::{
    Router,
    routing::{get, patch},
};

use crate::modules::categories::controller::{
    create_category, delete_category, list_categories, update_category,
};
use crate::state::AppState;

pub fn init_categories_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/{id}", patch(update_category).delete(delete_category))
}

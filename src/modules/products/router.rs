use axum::{Router, routing::get};

use crate::modules::products::controller::{
    create_product, delete_product, get_featured_products, get_product, list_products,
    update_product,
};
use crate::modules::reviews::controller::get_product_reviews;
use crate::state::AppState;

/// Catalog routes. Reads are public; mutations carry the `RequireAdmin`
/// extractor in their handlers.
pub fn init_products_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/featured", get(get_featured_products))
        .route(
            "/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .route("/{id}/reviews", get(get_product_reviews))
}

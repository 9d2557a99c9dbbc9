use axum::{Router, routing::get};

use crate::modules::users::controller::{
    get_profile, get_user, list_users, update_profile, update_user,
};
use crate::state::AppState;

pub fn init_profile_router() -> Router<AppState> {
    Router::new().route("/", get(get_profile).patch(update_profile))
}

/// Mounted under `/admin/users`, behind the admin layer.
pub fn init_admin_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/{id}", get(get_user).patch(update_user))
}

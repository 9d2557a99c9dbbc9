//! Role-based authorization for admin routes.
//!
//! Two forms, both backed by the same flat role check:
//! 1. A layer for whole route trees (`require_admin` with
//!    `middleware::from_fn_with_state`)
//! 2. A `RequireAdmin` extractor for individual handlers on otherwise
//!    public routers

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// True iff the resolved identity carries the admin role. Flat equality
/// check, no hierarchy.
pub fn is_admin(auth_user: &AuthUser) -> bool {
    UserRole::parse(auth_user.role()) == Some(UserRole::Admin)
}

fn check_admin(auth_user: &AuthUser) -> Result<(), AppError> {
    if is_admin(auth_user) {
        Ok(())
    } else {
        Err(AppError::forbidden("Administrator privileges required"))
    }
}

/// Middleware layer for admin-only route trees.
///
/// ```rust,ignore
/// Router::new()
///     .nest("/admin", admin_router())
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
/// ```
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    let auth_user = match AuthUser::from_request_parts(&mut parts, &state).await {
        Ok(user) => user,
        Err(err) => return err.into_response(),
    };

    if let Err(err) = check_admin(&auth_user) {
        return err.into_response();
    }

    next.run(Request::from_parts(parts, body)).await
}

/// Extractor form of the admin gate, for handlers that sit on a router
/// with public siblings (e.g. catalog mutations).
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        check_admin(&auth_user)?;
        Ok(RequireAdmin(auth_user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::model::Claims;

    fn auth_user_with_role(role: &str) -> AuthUser {
        AuthUser(Claims {
            sub: uuid::Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            role: role.to_string(),
            exp: 9999999999,
            iat: 1234567890,
        })
    }

    #[test]
    fn admin_passes() {
        assert!(is_admin(&auth_user_with_role("admin")));
        assert!(check_admin(&auth_user_with_role("admin")).is_ok());
    }

    #[test]
    fn customer_fails() {
        assert!(!is_admin(&auth_user_with_role("customer")));
        let err = check_admin(&auth_user_with_role("customer")).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn unknown_role_fails_closed() {
        assert!(!is_admin(&auth_user_with_role("superadmin")));
        assert!(!is_admin(&auth_user_with_role("")));
    }
}

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Resolves a caller's identity from the request headers.
///
/// Looks for `Authorization: Bearer <token>` first, then a `token`
/// cookie. Returns `None` when no token is present or verification
/// fails (bad signature, expired, malformed); resolution never errors.
/// Pure function of the headers and the signing secret.
pub fn resolve_credentials(headers: &HeaderMap, jwt_config: &JwtConfig) -> Option<Claims> {
    let token = bearer_token(headers).or_else(|| cookie_token(headers))?;
    verify_token(&token, jwt_config).ok()
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

fn cookie_token(headers: &HeaderMap) -> Option<String> {
    CookieJar::from_headers(headers)
        .get("token")
        .map(|cookie| cookie.value().to_string())
}

/// Extractor that rejects with 401 unless the request carries a valid
/// token. Routes that require authentication take this as a handler
/// argument.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Result<uuid::Uuid, AppError> {
        uuid::Uuid::parse_str(&self.0.sub)
            .map_err(|_| AppError::unauthorized("Invalid user ID in token"))
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn role(&self) -> &str {
        &self.0.role
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_credentials(&parts.headers, &state.jwt_config)
            .map(AuthUser)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::users::model::UserRole;
    use crate::utils::jwt::create_access_token;
    use axum::http::HeaderValue;
    use uuid::Uuid;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry: 3600,
        }
    }

    fn signed_token(config: &JwtConfig) -> String {
        create_access_token(Uuid::new_v4(), "shopper@example.com", UserRole::Customer, config)
            .unwrap()
    }

    #[test]
    fn resolves_bearer_header() {
        let config = test_config();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", signed_token(&config))).unwrap(),
        );

        let claims = resolve_credentials(&headers, &config).unwrap();
        assert_eq!(claims.email, "shopper@example.com");
    }

    #[test]
    fn falls_back_to_token_cookie() {
        let config = test_config();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("session=abc; token={}", signed_token(&config)))
                .unwrap(),
        );

        assert!(resolve_credentials(&headers, &config).is_some());
    }

    #[test]
    fn header_wins_over_cookie() {
        let config = test_config();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", signed_token(&config))).unwrap(),
        );
        headers.insert(header::COOKIE, HeaderValue::from_static("token=garbage"));

        assert!(resolve_credentials(&headers, &config).is_some());
    }

    #[test]
    fn absent_when_no_token() {
        assert!(resolve_credentials(&HeaderMap::new(), &test_config()).is_none());
    }

    #[test]
    fn absent_when_token_is_garbage() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer not.a.jwt"),
        );
        assert!(resolve_credentials(&headers, &test_config()).is_none());
    }

    #[test]
    fn absent_when_signed_with_other_secret() {
        let other = JwtConfig {
            secret: "different-secret".to_string(),
            access_token_expiry: 3600,
        };
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", signed_token(&other))).unwrap(),
        );
        assert!(resolve_credentials(&headers, &test_config()).is_none());
    }
}

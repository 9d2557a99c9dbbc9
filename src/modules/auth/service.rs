use sqlx::PgPool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{UserResponse, UserRow};
use crate::utils::errors::{AppError, is_unique_violation};
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginRequest, LoginResponse, RegisterRequestDto};

/// Trims surrounding whitespace and lower-cases, so the same mailbox
/// written two ways maps to one account. Applied before every lookup
/// and insert; the unique index enforces the rest.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto))]
    pub async fn register_user(
        db: &PgPool,
        dto: RegisterRequestDto,
    ) -> Result<UserResponse, AppError> {
        // ValidatedJson has already run the required checks; the guard
        // keeps the DTO's Option fields from reaching the query.
        let (Some(email), Some(password), Some(name)) = (dto.email, dto.password, dto.name) else {
            return Err(AppError::bad_request("email, password and name are required"));
        };

        let email = normalize_email(&email);

        let name = name.trim().to_string();
        if name.chars().count() < 2 {
            return Err(AppError::bad_request("Name must be at least 2 characters"));
        }

        let hashed_password = hash_password(&password)?;

        let user = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (email, password, name, role)
             VALUES ($1, $2, $3, 'customer')
             RETURNING id, email, password, name, role, created_at, updated_at",
        )
        .bind(&email)
        .bind(&hashed_password)
        .bind(&name)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::bad_request("Email already exists")
            } else {
                AppError::database(e)
            }
        })?;

        Ok(user.into())
    }

    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let email = normalize_email(&dto.email);

        let user = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, password, name, role, created_at, updated_at
             FROM users WHERE email = $1",
        )
        .bind(&email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        if !verify_password(&dto.password, &user.password)? {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let access_token = create_access_token(user.id, &user.email, user.role, jwt_config)?;

        Ok(LoginResponse {
            access_token,
            user: user.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  A@B.Com "), "a@b.com");
        assert_eq!(normalize_email("jo@example.com"), "jo@example.com");
        assert_eq!(normalize_email("MIXED@Case.ORG"), "mixed@case.org");
    }
}

//! User entities and DTOs.
//!
//! [`UserRow`] is the full database record, password hash included, and
//! never leaves the service layer. Everything returned to callers goes
//! through [`UserResponse`], an explicit allow-list of safe fields.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::pagination::{PaginationMeta, PaginationParams};

/// Closed role set. Registration always produces `Customer`; admins are
/// created through the CLI or by another admin.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Admin,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "customer" => Some(UserRole::Customer),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full user record as stored. Contains the password hash; do not
/// serialize.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// The user payload returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            name: row.name,
            role: row.role,
            created_at: row.created_at,
        }
    }
}

/// DTO for updating the caller's own profile. Only the name is
/// user-mutable; email and role changes go through admin endpoints.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: Option<String>,
}

/// DTO for admin edits of a user. Absent fields are left untouched.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AdminUpdateUserDto {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: Option<String>,
    pub role: Option<UserRole>,
}

/// Query parameters for the admin user list.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UserFilterParams {
    pub email: Option<String>,
    pub role: Option<UserRole>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedUsersResponse {
    pub data: Vec<UserResponse>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trip() {
        assert_eq!(UserRole::parse("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::parse("customer"), Some(UserRole::Customer));
        assert_eq!(UserRole::parse("root"), None);
        assert_eq!(UserRole::Admin.as_str(), "admin");
        assert_eq!(UserRole::Customer.to_string(), "customer");
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), r#""admin""#);
        let role: UserRole = serde_json::from_str(r#""customer""#).unwrap();
        assert_eq!(role, UserRole::Customer);
    }

    #[test]
    fn response_has_no_password_field() {
        let row = UserRow {
            id: Uuid::new_v4(),
            email: "a@b.com".to_string(),
            password: "$2b$12$secret-hash".to_string(),
            name: "Jo".to_string(),
            role: UserRole::Customer,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let serialized = serde_json::to_string(&UserResponse::from(row)).unwrap();
        assert!(serialized.contains("a@b.com"));
        assert!(!serialized.contains("password"));
        assert!(!serialized.contains("secret-hash"));
    }

    #[test]
    fn update_profile_dto_validates_length() {
        use validator::Validate;

        let dto = UpdateProfileDto {
            name: Some("Jo".to_string()),
        };
        assert!(dto.validate().is_ok());

        let dto = UpdateProfileDto {
            name: Some("J".to_string()),
        };
        assert!(dto.validate().is_err());

        // Absent name is a no-op update, not an error.
        let dto = UpdateProfileDto { name: None };
        assert!(dto.validate().is_ok());
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::users::model::UserResponse;

/// JWT claims. `sub` carries the user id; `role` is the role slug the
/// authorization gate checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

/// Registration body. Fields are `Option` so a body missing several of
/// them fails validation with every absent field named at once, instead
/// of serde stopping at the first.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(
        required(message = "email is required"),
        email(message = "Email must be a valid email address")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "password is required"),
        length(min = 8, message = "Password must be at least 8 characters")
    )]
    pub password: Option<String>,
    #[validate(
        required(message = "name is required"),
        length(min = 2, message = "Name must be at least 2 characters")
    )]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn dto(email: Option<&str>, password: Option<&str>, name: Option<&str>) -> RegisterRequestDto {
        RegisterRequestDto {
            email: email.map(str::to_string),
            password: password.map(str::to_string),
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn register_dto_accepts_valid_input() {
        assert!(dto(Some("a@b.com"), Some("longenough"), Some("Jo")).validate().is_ok());
    }

    #[test]
    fn register_dto_rejects_bad_email() {
        assert!(dto(Some("not-an-email"), Some("longenough"), Some("Jo")).validate().is_err());
    }

    #[test]
    fn register_dto_rejects_short_password() {
        assert!(dto(Some("a@b.com"), Some("short"), Some("Jo")).validate().is_err());
    }

    #[test]
    fn register_dto_rejects_short_name() {
        assert!(dto(Some("a@b.com"), Some("longenough"), Some("J")).validate().is_err());
    }

    #[test]
    fn register_dto_names_every_missing_field() {
        let parsed: RegisterRequestDto = serde_json::from_str("{}").unwrap();
        let errors = parsed.validate().unwrap_err();
        let fields = errors.field_errors();

        for (field, expected) in [
            ("email", "email is required"),
            ("password", "password is required"),
            ("name", "name is required"),
        ] {
            assert_eq!(fields[field][0].message.as_deref(), Some(expected));
        }
    }

    #[test]
    fn register_dto_names_only_the_missing_fields() {
        let parsed: RegisterRequestDto =
            serde_json::from_str(r#"{"email":"a@b.com","password":"longenough"}"#).unwrap();
        let errors = parsed.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(!fields.contains_key("email"));
        assert!(!fields.contains_key("password"));
    }
}

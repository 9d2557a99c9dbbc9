mod common;

use common::test_jwt_config;
use shopwright::config::jwt::JwtConfig;
use shopwright::modules::users::model::UserRole;
use shopwright::utils::jwt::{create_access_token, verify_token};
use uuid::Uuid;

#[test]
fn test_create_access_token_success() {
    let jwt_config = test_jwt_config();
    let user_id = Uuid::new_v4();

    let result = create_access_token(user_id, "test@example.com", UserRole::Customer, &jwt_config);

    assert!(result.is_ok());
    let token = result.unwrap();
    assert!(!token.is_empty());
}

#[test]
fn test_verify_token_success() {
    let jwt_config = test_jwt_config();
    let user_id = Uuid::new_v4();
    let email = "test@example.com";

    let token = create_access_token(user_id, email, UserRole::Admin, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.email, email);
    assert_eq!(claims.role, "admin");
}

#[test]
fn test_verify_token_roundtrip_all_roles() {
    let jwt_config = test_jwt_config();

    for role in [UserRole::Customer, UserRole::Admin] {
        let token =
            create_access_token(Uuid::new_v4(), "test@example.com", role, &jwt_config).unwrap();
        let claims = verify_token(&token, &jwt_config).unwrap();
        assert_eq!(claims.role, role.as_str());
    }
}

#[test]
fn test_verify_token_invalid_token() {
    let jwt_config = test_jwt_config();
    assert!(verify_token("not.a.token", &jwt_config).is_err());
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = test_jwt_config();
    let token =
        create_access_token(Uuid::new_v4(), "test@example.com", UserRole::Customer, &jwt_config)
            .unwrap();

    let other = JwtConfig {
        secret: "a_completely_different_secret".to_string(),
        access_token_expiry: 3600,
    };
    assert!(verify_token(&token, &other).is_err());
}

#[test]
fn test_verify_token_tampered_payload() {
    let jwt_config = test_jwt_config();
    let token =
        create_access_token(Uuid::new_v4(), "test@example.com", UserRole::Customer, &jwt_config)
            .unwrap();

    // Flip a character in the payload segment; the signature no longer matches.
    let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
    parts[1] = format!("{}x", parts[1]);
    let tampered = parts.join(".");

    assert!(verify_token(&tampered, &jwt_config).is_err());
}

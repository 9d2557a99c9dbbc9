mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::test_app_state;
use http_body_util::BodyExt;
use shopwright::router::init_router;
use tower::util::ServiceExt;

fn register(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn error_message(response: axum::response::Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    json["error"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn register_rejects_broken_json() {
    let app = init_router(test_app_state());

    let response = app.oneshot(register("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response).await, "Invalid JSON");
}

#[tokio::test]
async fn register_names_every_missing_field() {
    let app = init_router(test_app_state());

    let response = app.oneshot(register("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let message = error_message(response).await;
    assert!(message.contains("email is required"), "{message}");
    assert!(message.contains("password is required"), "{message}");
    assert!(message.contains("name is required"), "{message}");
}

#[tokio::test]
async fn register_names_only_the_missing_fields() {
    let app = init_router(test_app_state());

    let response = app
        .oneshot(register(r#"{"email":"a@b.com","name":"Jo"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let message = error_message(response).await;
    assert!(message.contains("password is required"), "{message}");
    assert!(!message.contains("email is required"), "{message}");
    assert!(!message.contains("name is required"), "{message}");
}

#[tokio::test]
async fn register_rejects_short_password() {
    let app = init_router(test_app_state());

    let response = app
        .oneshot(register(
            r#"{"email":"a@b.com","password":"short","name":"Jo"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(response).await,
        "Password must be at least 8 characters"
    );
}

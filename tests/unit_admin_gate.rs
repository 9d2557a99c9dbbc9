mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{test_app_state, token_for};
use http_body_util::BodyExt;
use shopwright::modules::users::model::UserRole;
use shopwright::router::init_router;
use tower::util::ServiceExt;

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn admin_routes_reject_missing_token() {
    let state = test_app_state();
    let app = init_router(state);

    let response = app
        .oneshot(get("/api/admin/dashboard", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_routes_reject_customer_token() {
    let state = test_app_state();
    let token = token_for(UserRole::Customer, &state.jwt_config);
    let app = init_router(state);

    let response = app
        .oneshot(get("/api/admin/orders", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Administrator privileges required");
}

#[tokio::test]
async fn catalog_mutation_rejects_customer_token() {
    let state = test_app_state();
    let token = token_for(UserRole::Customer, &state.jwt_config);
    let app = init_router(state);

    let request = Request::builder()
        .method("POST")
        .uri("/api/products")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"Widget","price":"9.99"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn protected_routes_reject_missing_token() {
    let state = test_app_state();
    let app = init_router(state);

    for uri in ["/api/profile", "/api/cart", "/api/orders"] {
        let response = app.clone().oneshot(get(uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
}

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_product, create_test_user, generate_unique_email};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::json;
use shopwright::config::cors::CorsConfig;
use shopwright::config::email::EmailConfig;
use shopwright::config::jwt::JwtConfig;
use shopwright::config::orders::OrderConfig;
use shopwright::router::init_router;
use shopwright::state::AppState;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

async fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool.clone(),
        jwt_config: JwtConfig::from_env(),
        email_config: EmailConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        order_config: OrderConfig::from_env(),
    };
    init_router(state)
}

async fn get_auth_token(app: axum::Router, email: &str, password: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "password": password
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    body["access_token"].as_str().unwrap().to_string()
}

async fn place_order_request(
    app: axum::Router,
    token: &str,
    body: serde_json::Value,
) -> axum::http::Response<axum::body::Body> {
    let request = Request::builder()
        .method("POST")
        .uri("/api/orders")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_failed_order_leaves_no_rows_behind(pool: PgPool) {
    let email = generate_unique_email();
    let password = "testpass123";
    create_test_user(&pool, &email, password, "customer").await;
    let product_id = create_test_product(&pool, "Mug", Decimal::new(999, 2), 10).await;

    let app = setup_test_app(pool.clone()).await;
    let token = get_auth_token(app, &email, password).await;

    // Second line references a product that does not exist, so the
    // item insert fails after the order row was already written inside
    // the transaction.
    let app = setup_test_app(pool.clone()).await;
    let response = place_order_request(
        app,
        &token,
        json!({
            "shipping_address": {"line1": "1 Main St", "city": "Springfield"},
            "items": [
                {"product_id": product_id, "price": "9.99", "quantity": 1},
                {"product_id": Uuid::new_v4(), "price": "5.00", "quantity": 2}
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "Unknown product in order");

    let orders = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
        .fetch_one(&pool)
        .await
        .unwrap();
    let items = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM order_items")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(orders, 0, "order row must roll back with its items");
    assert_eq!(items, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_order_hides_other_users_orders(pool: PgPool) {
    let owner_email = generate_unique_email();
    let other_email = generate_unique_email();
    let password = "testpass123";
    create_test_user(&pool, &owner_email, password, "customer").await;
    create_test_user(&pool, &other_email, password, "customer").await;
    let product_id = create_test_product(&pool, "Teapot", Decimal::new(2500, 2), 5).await;

    let app = setup_test_app(pool.clone()).await;
    let owner_token = get_auth_token(app, &owner_email, password).await;

    let app = setup_test_app(pool.clone()).await;
    let response = place_order_request(
        app,
        &owner_token,
        json!({
            "shipping_address": {"line1": "1 Main St", "city": "Springfield"},
            "items": [{"product_id": product_id, "price": "25.00", "quantity": 1}]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let order_id = body["id"].as_str().unwrap().to_string();

    // Someone else's order id reads as not found.
    let app = setup_test_app(pool.clone()).await;
    let other_token = get_auth_token(app, &other_email, password).await;

    let app = setup_test_app(pool.clone()).await;
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/orders/{}", order_id))
        .header("authorization", format!("Bearer {}", other_token))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The owner still sees it.
    let app = setup_test_app(pool.clone()).await;
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/orders/{}", order_id))
        .header("authorization", format!("Bearer {}", owner_token))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_patch_product_updates_only_given_fields(pool: PgPool) {
    let email = generate_unique_email();
    let password = "testpass123";
    create_test_user(&pool, &email, password, "admin").await;
    let product_id = create_test_product(&pool, "Lamp", Decimal::new(4000, 2), 7).await;

    let app = setup_test_app(pool.clone()).await;
    let token = get_auth_token(app, &email, password).await;

    let app = setup_test_app(pool.clone()).await;
    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/api/products/{}", product_id))
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(r#"{"price": "12.50"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let price: Decimal = body["price"].as_str().unwrap().parse().unwrap();
    assert_eq!(price, Decimal::new(1250, 2));
    assert_eq!(body["name"], "Lamp");
    assert_eq!(body["stock"], 7);
}

//! Router-level tests for the request paths that never reach the database:
//! request validation, the bearer-token gate, and method handling. The pool
//! is connected lazily, so no Postgres instance is needed here.

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use dashboard_backend::{AppState, config::Config, router::create_router, utils::generate_token};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/dashboard_test".into(),
        jwt_secret: "test-secret".into(),
        jwt_expiration_secs: 24 * 3600,
        server_host: "::".into(),
        server_port: 0,
    }
}

fn test_state() -> AppState {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database_url)
        .expect("Failed to create lazy pool");
    AppState { pool, config }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn login_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/users/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn login_with_empty_username_is_a_400() {
    let app = create_router(test_state());

    let response = app
        .oneshot(login_request(r#"{"username":"","password":"x"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Username and Password are required");
}

#[tokio::test]
async fn login_with_missing_password_field_is_a_400() {
    let app = create_router(test_state());

    let response = app
        .oneshot(login_request(r#"{"username":"admin"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Username and Password are required");
}

#[tokio::test]
async fn wrong_method_on_login_is_a_405() {
    let app = create_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/users/login")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Method Not Allowed");
}

#[tokio::test]
async fn protected_route_without_token_is_a_401() {
    let app = create_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/clients")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn protected_route_with_garbage_token_is_a_401() {
    let app = create_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/projects")
                .header(header::AUTHORIZATION, "Bearer not.a.token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_signed_with_another_secret_is_a_401() {
    let mut other = test_config();
    other.jwt_secret = "not-the-server-secret".into();
    let token = generate_token(1, "admin", "admin", &other).unwrap();

    let app = create_router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/currencies")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_signed_with_the_server_secret_passes_the_bearer_gate() {
    let state = test_state();
    let token = generate_token(1, "admin", "admin", &state.config).unwrap();

    let app = create_router(state);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/clients")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // The gate let the request through to the handler, whose lazily-connected
    // pool then fails to reach a database.
    assert_ne!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn unknown_path_is_a_404() {
    let app = create_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/invoices")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

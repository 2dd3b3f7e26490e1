//! Shared helpers for HTTP integration tests.
//!
//! Builds the application router exactly as production does (same
//! middleware stack via `build_app_router`), plus seeding and request
//! helpers.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use tempo_api::auth::jwt::{generate_access_token, JwtConfig};
use tempo_api::config::ServerConfig;
use tempo_api::router::build_app_router;
use tempo_api::state::AppState;
use tempo_outbound::{OutboundClient, OutboundConfig};

/// Fixed JWT secret shared by the test app and the token helper.
const TEST_JWT_SECRET: &str = "integration-test-secret-with-enough-entropy";

/// Build a test `ServerConfig` with safe defaults.
///
/// Outbound collaborators are left unconfigured so approval tests do not
/// make network calls unless a test opts in.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
        outbound: OutboundConfig {
            analytics_base_url: None,
            automation_base_url: None,
            request_timeout_secs: 1,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Build the application router with a custom config (e.g. pointing the
/// outbound collaborators at an unreachable address).
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let outbound = Arc::new(OutboundClient::new(config.outbound.clone()));
    let state = AppState {
        pool,
        config: Arc::new(config),
        outbound,
    };
    build_app_router(state.clone(), &state.config)
}

/// Mint an access token for the given employee.
pub fn token_for(user_id: i64, tenant_id: i64, role: &str) -> String {
    let config = test_config();
    generate_access_token(user_id, tenant_id, role, &config.jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Seeding helpers
// ---------------------------------------------------------------------------

/// Insert a tenant and return its id.
pub async fn create_tenant(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO tenants (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("tenant insert should succeed")
}

/// Insert an employee and return its id.
pub async fn create_employee(
    pool: &PgPool,
    tenant_id: i64,
    first_name: &str,
    role: &str,
    manager_id: Option<i64>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO employees (tenant_id, first_name, last_name, email, role, manager_id)
         VALUES ($1, $2, 'Tester', $3, $4, $5)
         RETURNING id",
    )
    .bind(tenant_id)
    .bind(first_name)
    .bind(format!("{}@test.com", first_name.to_lowercase()))
    .bind(role)
    .bind(manager_id)
    .fetch_one(pool)
    .await
    .expect("employee insert should succeed")
}

/// Insert a project and return its id.
pub async fn create_project(pool: &PgPool, tenant_id: i64, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO projects (tenant_id, name) VALUES ($1, $2) RETURNING id")
        .bind(tenant_id)
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("project insert should succeed")
}

/// Insert a timesheet with the given status and return its id.
pub async fn create_timesheet(
    pool: &PgPool,
    tenant_id: i64,
    employee_id: i64,
    project_id: Option<i64>,
    status: &str,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO timesheets
            (tenant_id, employee_id, project_id, work_date, hours_worked,
             billable_hours, overtime_hours, status)
         VALUES ($1, $2, $3, '2025-03-14', 8.0, 6.5, 1.0, $4)
         RETURNING id",
    )
    .bind(tenant_id)
    .bind(employee_id)
    .bind(project_id)
    .bind(status)
    .fetch_one(pool)
    .await
    .expect("timesheet insert should succeed")
}

/// Fetch a timesheet's status column directly.
pub async fn timesheet_status(pool: &PgPool, id: i64) -> String {
    sqlx::query_scalar("SELECT status FROM timesheets WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("timesheet should exist")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request without authentication.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body, without authentication.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Assert a status code and return the parsed body for further checks.
pub async fn expect_status(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

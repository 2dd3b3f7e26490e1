//! Integration tests for the notifications listing endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_employee, create_tenant, get_auth, token_for};
use sqlx::PgPool;

/// Insert a notification directly.
async fn insert_notification(pool: &PgPool, tenant_id: i64, user_id: i64, title: &str) {
    sqlx::query(
        "INSERT INTO notifications (tenant_id, user_id, kind, title, message, data)
         VALUES ($1, $2, 'timesheet_approved', $3, 'msg', '{}')",
    )
    .bind(tenant_id)
    .bind(user_id)
    .bind(title)
    .execute(pool)
    .await
    .expect("notification insert should succeed");
}

/// A user sees only their own notifications, newest first.
#[sqlx::test(migrations = "../db/migrations")]
async fn user_sees_only_own_notifications(pool: PgPool) {
    let tenant = create_tenant(&pool, "acme").await;
    let erin = create_employee(&pool, tenant, "Erin", "employee", None).await;
    let omar = create_employee(&pool, tenant, "Omar", "employee", None).await;

    insert_notification(&pool, tenant, erin, "first").await;
    insert_notification(&pool, tenant, erin, "second").await;
    insert_notification(&pool, tenant, omar, "other").await;

    let app = common::build_test_app(pool);
    let token = token_for(erin, tenant, "employee");

    let response = get_auth(app, "/api/v1/notifications", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "second");
    assert_eq!(items[1]["title"], "first");
}

/// Listing requires authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn listing_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/notifications").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// The limit query parameter caps the page size.
#[sqlx::test(migrations = "../db/migrations")]
async fn limit_caps_page_size(pool: PgPool) {
    let tenant = create_tenant(&pool, "acme").await;
    let erin = create_employee(&pool, tenant, "Erin", "employee", None).await;

    for i in 0..3 {
        insert_notification(&pool, tenant, erin, &format!("n{i}")).await;
    }

    let app = common::build_test_app(pool);
    let token = token_for(erin, tenant, "employee");

    let response = get_auth(app, "/api/v1/notifications?limit=2", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

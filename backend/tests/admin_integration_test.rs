//! Integration tests for the admin user listing

mod common;

use axum::http::StatusCode;

#[tokio::test]
#[ignore = "requires database"]
async fn test_admin_users_requires_auth() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/admin/users").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_admin_users_rejects_regular_user() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, response) = app.get_auth("/admin/users", &user.access_token).await;

    assert_eq!(status, StatusCode::FORBIDDEN);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"], "Forbidden");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_admin_users_success() {
    let app = common::TestApp::new().await;
    let admin = app.create_test_user().await;
    app.promote_to_admin(&admin).await;
    let regular = app.create_test_user().await;

    let (status, response) = app.get_auth("/admin/users", &admin.access_token).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let users = response.as_array().unwrap();
    assert!(users.len() >= 2);

    let admin_entry = users.iter().find(|u| u["id"] == admin.id).unwrap();
    assert_eq!(admin_entry["userTypeId"], 1);
    assert_eq!(admin_entry["email"], admin.email);
    assert!(admin_entry.get("password").is_none());

    let regular_entry = users.iter().find(|u| u["id"] == regular.id).unwrap();
    assert_eq!(regular_entry["userTypeId"], 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_admin_flag_checked_per_request() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    // Rejected while the account is a regular user
    let (status, _) = app.get_auth("/admin/users", &user.access_token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // The same token passes once the account is promoted, because
    // the role lives in the users table rather than in the token
    app.promote_to_admin(&user).await;
    let (status, _) = app.get_auth("/admin/users", &user.access_token).await;
    assert_eq!(status, StatusCode::OK);
}

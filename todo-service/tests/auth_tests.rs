mod common;

use auth::TokenKind;
use chrono::Duration;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_success_returns_user_and_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "nicola",
            "email_address": "nicola@example.com",
            "password": "Str0ng!Pw"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["user"]["username"], "nicola");
    assert_eq!(body["data"]["user"]["email"], "nicola@example.com");
    assert_eq!(body["data"]["user"]["is_active"], true);
    assert!(body["data"]["user"]["id"].is_string());

    // The token's subject is the created user's id
    let token = body["data"]["token"].as_str().unwrap();
    let claims = app.token_codec.verify(token).expect("Token should verify");
    assert_eq!(claims.sub, body["data"]["user"]["id"].as_str().unwrap());
}

#[tokio::test]
async fn test_register_never_returns_password_hash() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "nicola",
            "email_address": "nicola@example.com",
            "password": "Str0ng!Pw"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let body = response.text().await.expect("Failed to read response");
    assert!(!body.contains("password"));
    assert!(!body.contains("argon2"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    app.register_user("nicola", "nicola@example.com", "Str0ng!Pw")
        .await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "nicola2",
            "email_address": "nicola@example.com",
            "password": "Str0ng!Pw"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already registered"));
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::spawn().await;

    app.register_user("nicola", "nicola@example.com", "Str0ng!Pw")
        .await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "nicola",
            "email_address": "other@example.com",
            "password": "Str0ng!Pw"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_weak_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "nicola",
            "email_address": "nicola@example.com",
            "password": "weak"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("at least 8 characters"));
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "nicola",
            "email_address": "not-an-email",
            "password": "Str0ng!Pw"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("email"));
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    let (user_id, _) = app
        .register_user("nicola", "nicola@example.com", "Str0ng!Pw")
        .await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "Str0ng!Pw"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["user"]["id"], user_id.as_str());

    let token = body["data"]["token"].as_str().unwrap();
    let claims = app.token_codec.verify(token).expect("Token should verify");
    assert_eq!(claims.sub, user_id);
}

#[tokio::test]
async fn test_login_failures_are_uniform() {
    let app = TestApp::spawn().await;

    app.register_user("nicola", "nicola@example.com", "Str0ng!Pw")
        .await;

    // Wrong password for an existing account
    let wrong_password = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "Wr0ng!Pw!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Unknown email entirely
    let unknown_email = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "nobody@example.com",
            "password": "Str0ng!Pw"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // Identical bodies: the endpoint must not reveal which part was wrong
    let wrong_password_body: serde_json::Value = wrong_password.json().await.unwrap();
    let unknown_email_body: serde_json::Value = unknown_email.json().await.unwrap();
    assert_eq!(wrong_password_body, unknown_email_body);
}

#[tokio::test]
async fn test_me_returns_authenticated_user() {
    let app = TestApp::spawn().await;

    let (user_id, token) = app
        .register_user("nicola", "nicola@example.com", "Str0ng!Pw")
        .await;

    let response = app
        .get_authenticated("/api/auth/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], user_id.as_str());
    assert_eq!(body["data"]["username"], "nicola");
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_me_without_credential() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/auth/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_garbage_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/api/auth/me", "not.a.token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_tampered_token() {
    let app = TestApp::spawn().await;

    let (_, token) = app
        .register_user("nicola", "nicola@example.com", "Str0ng!Pw")
        .await;

    // Flip one character of the payload segment
    let mut parts: Vec<String> = token.split('.').map(String::from).collect();
    let mut payload = parts[1].clone().into_bytes();
    payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
    parts[1] = String::from_utf8(payload).unwrap();
    let tampered = parts.join(".");

    let response = app
        .get_authenticated("/api/auth/me", &tampered)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_expired_token() {
    let app = TestApp::spawn().await;

    let (user_id, _) = app
        .register_user("nicola", "nicola@example.com", "Str0ng!Pw")
        .await;

    // Signed with the right secret but already expired
    let expired = app
        .token_codec
        .issue(&user_id, TokenKind::Access, Duration::seconds(-1))
        .unwrap();

    let response = app
        .get_authenticated("/api/auth/me", &expired)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_valid_token_for_unknown_user() {
    let app = TestApp::spawn().await;

    // Properly signed token whose subject was never registered
    let token = app
        .token_codec
        .issue(
            &uuid::Uuid::new_v4().to_string(),
            TokenKind::Access,
            Duration::minutes(30),
        )
        .unwrap();

    let response = app
        .get_authenticated("/api/auth/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_is_stateless() {
    let app = TestApp::spawn().await;

    let (_, token) = app
        .register_user("nicola", "nicola@example.com", "Str0ng!Pw")
        .await;

    let response = app
        .post("/api/auth/logout")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    // No server-side revocation: the token still works until it expires
    let response = app
        .get_authenticated("/api/auth/me", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_profile() {
    let app = TestApp::spawn().await;

    let (_, token) = app
        .register_user("nicola", "nicola@example.com", "Str0ng!Pw")
        .await;

    let response = app
        .patch_authenticated("/api/users/me", &token)
        .json(&json!({
            "email_address": "updated@example.com"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["email"], "updated@example.com");

    // Login works against the new email, not the old one
    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "updated@example.com",
            "password": "Str0ng!Pw"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_profile_password_change() {
    let app = TestApp::spawn().await;

    let (_, token) = app
        .register_user("nicola", "nicola@example.com", "Str0ng!Pw")
        .await;

    let response = app
        .patch_authenticated("/api/users/me", &token)
        .json(&json!({
            "password": "N3w!Passw0rd"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    // Old password no longer works
    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "Str0ng!Pw"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // New one does
    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "N3w!Passw0rd"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

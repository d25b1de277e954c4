//! End-to-end tests for the HTTP surface, driven through `tower::ServiceExt::oneshot`.

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use tower::ServiceExt;

use auth_service_lib::AuthServiceConfig;
use common::ServerConfig;
use gateway_lib::{config::GatewayConfig, routes::create_router, state::AppState};

const SECRET: &str = "integration-test-secret-32-chars-long";

fn app() -> Router {
    let config = GatewayConfig {
        server: ServerConfig::default(),
        auth: AuthServiceConfig::new(SECRET, 35).unwrap(),
    };
    create_router(AppState::from_config(&config).unwrap())
}

/// Sign a token directly, bypassing the login endpoint.
fn mint(subject: &str, expires_in_secs: i64) -> String {
    encode(
        &Header::default(),
        &json!({ "sub": subject, "exp": Utc::now().timestamp() + expires_in_secs }),
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

fn admin() -> String {
    mint("admin", 600)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, headers, body)
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn login_request(form: &'static str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/token")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .unwrap()
}

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_i64().unwrap())
        .collect()
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_issues_usable_token() {
    let app = app();

    let (status, _, body) = send(&app, login_request("username=admin&password=admin123")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");

    let token = body["access_token"].as_str().unwrap().to_string();
    let (status, _, body) = send(&app, request(Method::GET, "/users", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2]);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = app();
    let (status, headers, body) =
        send(&app, login_request("username=admin&password=wrong")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(headers[header::WWW_AUTHENTICATE], "Bearer");
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    assert!(body.get("access_token").is_none());
}

#[tokio::test]
async fn test_login_missing_field() {
    let app = app();
    let (status, _, body) = send(&app, login_request("username=admin")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Token verification
// =============================================================================

#[tokio::test]
async fn test_missing_token_rejected() {
    let app = app();
    let (status, headers, body) = send(&app, request(Method::GET, "/users/1", None, None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(headers[header::WWW_AUTHENTICATE], "Bearer");
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = app();
    let (status, _, body) =
        send(&app, request(Method::GET, "/users/1", Some("garbage"), None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["message"], "Invalid token");
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = app();
    let token = mint("admin", -10);
    let (status, _, _) = send(&app, request(Method::GET, "/users/1", Some(&token), None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_checked_before_payload() {
    let app = app();
    let (status, _, _) = send(
        &app,
        request(Method::POST, "/users", None, Some(json!({ "name": "x" }))),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _, _) = send(&app, request(Method::GET, "/users?page=0", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Registry
// =============================================================================

#[tokio::test]
async fn test_create_delete_scenario() {
    let app = app();
    let token = admin();

    let (status, _, body) = send(&app, request(Method::GET, "/users/1", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 1, "name": "Rethabile", "email": "retha@gmail.com" })
    );

    let (status, _, body) = send(
        &app,
        request(
            Method::POST,
            "/users",
            Some(&token),
            Some(json!({ "name": "Lee", "email": "lee@gmail.com" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 3);
    assert_eq!(body["name"], "Lee");

    let (status, _, body) =
        send(&app, request(Method::DELETE, "/users/2", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User deleted" }));

    let (status, _, body) = send(&app, request(Method::GET, "/users/2", Some(&token), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "User not found");

    let (_, _, body) = send(&app, request(Method::GET, "/users", Some(&token), None)).await;
    assert_eq!(ids(&body), vec![1, 3]);
}

#[tokio::test]
async fn test_list_pagination_sort_and_filter() {
    let app = app();
    let token = admin();

    for (name, email) in [("Lee", "lee@gmail.com"), ("alex", "alex@gmail.com")] {
        let (status, _, _) = send(
            &app,
            request(
                Method::POST,
                "/users",
                Some(&token),
                Some(json!({ "name": name, "email": email })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, _, body) = send(
        &app,
        request(Method::GET, "/users?page=2&per_page=3", Some(&token), None),
    )
    .await;
    assert_eq!(ids(&body), vec![4]);

    let (_, _, body) = send(
        &app,
        request(Method::GET, "/users?page=5&per_page=3", Some(&token), None),
    )
    .await;
    assert_eq!(body, json!([]));

    // Byte order: uppercase before lowercase
    let (_, _, body) = send(
        &app,
        request(Method::GET, "/users?sort_by=name", Some(&token), None),
    )
    .await;
    assert_eq!(ids(&body), vec![3, 1, 4, 2]);

    let (status, _, body) = send(
        &app,
        request(Method::GET, "/users?sort_by=bogus", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);

    let (_, _, body) = send(
        &app,
        request(Method::GET, "/users?name=MOS", Some(&token), None),
    )
    .await;
    assert_eq!(ids(&body), vec![2]);
}

#[tokio::test]
async fn test_list_rejects_bad_query() {
    let app = app();
    let token = admin();

    for uri in ["/users?page=0", "/users?per_page=0", "/users?page=abc"] {
        let (status, _, body) = send(&app, request(Method::GET, uri, Some(&token), None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_non_admin_subject() {
    let app = app();
    let token = mint("mosa", 600);

    let (status, _, body) = send(&app, request(Method::GET, "/users/1", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);

    let (status, _, body) = send(&app, request(Method::GET, "/users", Some(&token), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["message"], "Permission denied");

    let (status, _, _) = send(
        &app,
        request(
            Method::POST,
            "/users",
            Some(&token),
            Some(json!({ "name": "Lee", "email": "lee@gmail.com" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Forbidden even for a missing id
    let (status, _, _) =
        send(&app, request(Method::DELETE, "/users/99", Some(&token), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invalid_email_rejected() {
    let app = app();
    let (status, _, body) = send(
        &app,
        request(
            Method::POST,
            "/users",
            Some(&admin()),
            Some(json!({ "name": "Lee", "email": "not-an-email" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "value is not a valid email address");
}

#[tokio::test]
async fn test_update_user() {
    let app = app();
    let token = admin();
    let payload = json!({ "name": "Retha", "email": "retha@yahoo.com" });

    let (status, _, body) = send(
        &app,
        request(Method::PUT, "/users/1", Some(&token), Some(payload.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 1, "name": "Retha", "email": "retha@yahoo.com" })
    );

    let (status, _, _) = send(
        &app,
        request(Method::PUT, "/users/42", Some(&token), Some(payload)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_integer_id_rejected() {
    let app = app();
    let (status, _, body) =
        send(&app, request(Method::GET, "/users/abc", Some(&admin()), None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_user_count() {
    let app = app();
    let (status, _, body) = send(&app, request(Method::GET, "/health", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy", "users": 2 }));
}

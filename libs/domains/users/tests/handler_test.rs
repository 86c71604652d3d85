use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use domain_users::{ApiDoc, InMemoryUserRepository, UserService, handlers};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let service = UserService::new(InMemoryUserRepository::new());
    let api = Router::new().nest("/users", handlers::router(service));
    axum_helpers::create_router::<ApiDoc>(api)
}

fn alice() -> Value {
    json!({
        "firstname": "Alice",
        "lastname": "Smith",
        "email": "alice@example.com",
        "age": 25
    })
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_create_user_returns_generated_fields() {
    let app = app();

    let (status, body) = send(&app, json_request("POST", "/api/users", &alice())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(uuid::Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    assert!(body["created"].as_str().is_some());
    assert_eq!(body["firstname"], "Alice");
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["age"], 25);
}

#[tokio::test]
async fn test_create_user_with_empty_firstname_is_bad_request() {
    let app = app();
    let mut payload = alice();
    payload["firstname"] = json!("");

    let (status, body) = send(&app, json_request("POST", "/api/users", &payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "firstname is required");
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_user_twice_with_same_email_conflicts() {
    let app = app();

    let (first, _) = send(&app, json_request("POST", "/api/users", &alice())).await;
    let (second, body) = send(&app, json_request("POST", "/api/users", &alice())).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(body["message"], "email already exists");
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let app = app();
    let uri = format!("/api/users/{}", uuid::Uuid::now_v7());

    let (status, body) = send(&app, json_request("PATCH", &uri, &alice())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "user not found");
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = app();
    let (_, created) = send(&app, json_request("POST", "/api/users", &alice())).await;
    let uri = format!("/api/users/{}", created["id"].as_str().unwrap());

    let (deleted, body) = send(&app, empty_request("DELETE", &uri)).await;
    assert_eq!(deleted, StatusCode::OK);
    assert_eq!(body["message"], "User deleted successfully");

    let (status, body) = send(&app, empty_request("GET", &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "user not found");
}

#[tokio::test]
async fn test_get_is_idempotent() {
    let app = app();
    let (_, created) = send(&app, json_request("POST", "/api/users", &alice())).await;
    let uri = format!("/api/users/{}", created["id"].as_str().unwrap());

    let (first_status, first) = send(&app, empty_request("GET", &uri)).await;
    let (_, second) = send(&app, empty_request("GET", &uri)).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(first, created);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_update_replaces_fields_and_keeps_identity() {
    let app = app();
    let (_, created) = send(&app, json_request("POST", "/api/users", &alice())).await;
    let uri = format!("/api/users/{}", created["id"].as_str().unwrap());

    let update = json!({
        "firstname": "Alicia",
        "lastname": "Smith",
        "email": "alicia@example.com",
        "age": 26
    });
    let (status, body) = send(&app, json_request("PUT", &uri, &update)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["created"], created["created"]);
    assert_eq!(body["firstname"], "Alicia");
    assert_eq!(body["email"], "alicia@example.com");
    assert_eq!(body["age"], 26);
}

#[tokio::test]
async fn test_update_with_invalid_payload_is_bad_request() {
    let app = app();
    let (_, created) = send(&app, json_request("POST", "/api/users", &alice())).await;
    let uri = format!("/api/users/{}", created["id"].as_str().unwrap());

    let mut payload = alice();
    payload["age"] = json!(0);
    let (status, body) = send(&app, json_request("PATCH", &uri, &payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "age must be between 1 and 150");

    let (_, unchanged) = send(&app, empty_request("GET", &uri)).await;
    assert_eq!(unchanged, created);
}

#[tokio::test]
async fn test_invalid_uuid_is_bad_request() {
    let app = app();

    let (status, body) = send(&app, empty_request("GET", "/api/users/not-a-uuid")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid uuid");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"firstname\": \"Alice\", \"age\": \"old\"}"))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid request");
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let app = app();

    let (status, body) = send(&app, empty_request("GET", "/api/nothing-here")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

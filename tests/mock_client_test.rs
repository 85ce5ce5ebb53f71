//! Request handlers and the typed client against a scripted store.

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use resource_actor::mock::MockClient;
use resource_actor::FrameworkError;
use serde_json::{json, Value};
use tower::ServiceExt;
use user_directory::clients::UserClient;
use user_directory::http::router;
use user_directory::model::{User, UserCreate, UserId, UserUpdate};
use user_directory::user_actor::UserError;

fn alice() -> User {
    User {
        id: UserId(1),
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
    }
}

async fn call(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_closed_store_is_service_unavailable() {
    let mut mock = MockClient::<User>::new();
    mock.expect_list().return_err(FrameworkError::ActorClosed);
    mock.expect_get(UserId(1)).return_err(FrameworkError::ActorDropped);

    let app = router(UserClient::new(mock.client()));

    let (status, body) = call(&app, Method::GET, "/users", "").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"error": "Service unavailable"}));

    let (status, _) = call(&app, Method::GET, "/users/1", "").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    mock.verify();
}

#[tokio::test]
async fn test_store_rejection_is_bad_request() {
    let mut mock = MockClient::<User>::new();
    mock.expect_create()
        .return_err(FrameworkError::EntityError(Box::new(
            UserError::InvalidArgument("email is required".to_string()),
        )));

    let app = router(UserClient::new(mock.client()));
    let (status, body) = call(
        &app,
        Method::POST,
        "/users",
        r#"{"name": "Alice", "email": "alice@example.com"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing name or email"}));

    mock.verify();
}

#[tokio::test]
async fn test_handlers_relay_store_replies() {
    let mut mock = MockClient::<User>::new();
    mock.expect_get(UserId(1)).return_ok(Some(alice()));
    mock.expect_delete(UserId(1)).return_ok(false);
    mock.expect_get(UserId(7)).return_ok(None);

    let app = router(UserClient::new(mock.client()));

    let (status, body) = call(&app, Method::GET, "/users/1", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alice");

    let (status, body) = call(&app, Method::DELETE, "/users/1", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "User not found"}));

    // A malformed update body only looks the id up
    let (status, _) = call(&app, Method::PUT, "/users/7", "{oops").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    mock.verify();
}

#[tokio::test]
async fn test_user_client_maps_framework_errors() {
    let mut mock = MockClient::<User>::new();
    mock.expect_update(UserId(9))
        .return_err(FrameworkError::NotFound("9".to_string()));
    mock.expect_create()
        .return_err(FrameworkError::EntityError(Box::new(
            UserError::InvalidArgument("name is required".to_string()),
        )));
    mock.expect_reset().return_err(FrameworkError::ActorClosed);

    let users = UserClient::new(mock.client());

    let err = users
        .update_user(
            UserId(9),
            UserUpdate {
                name: Some("Nine".to_string()),
                email: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, UserError::NotFound("9".to_string()));

    let err = users.create_user(UserCreate::default()).await.unwrap_err();
    assert_eq!(err, UserError::InvalidArgument("name is required".to_string()));

    let err = users.reset().await.unwrap_err();
    assert!(matches!(err, UserError::StoreUnavailable(_)));

    mock.verify();
}

//! Handlers for the `/users` resource.
//!
//! Bodies are parsed as untyped JSON first so that "not JSON at all" (400 `Invalid JSON`)
//! and "JSON without usable fields" (400 `Missing name or email`) stay distinct.

use crate::clients::UserClient;
use crate::http::response::ApiError;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    serde_json::from_slice(body).map_err(|_| ApiError::InvalidJson)
}

/// The field's value when it is a JSON string; anything else counts as absent.
fn string_field(payload: &Value, field: &str) -> Option<String> {
    payload.get(field)?.as_str().map(str::to_owned)
}

/// Ids that are not plain non-negative integers can never name a record.
fn parse_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

pub async fn list_users(State(users): State<UserClient>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(users.list_users().await?))
}

pub async fn create_user(
    State(users): State<UserClient>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let payload = parse_body(&body)?;
    let (Some(name), Some(email)) = (
        string_field(&payload, "name"),
        string_field(&payload, "email"),
    ) else {
        return Err(ApiError::MissingFields);
    };

    let user = users.create_user(UserCreate::new(name, email)).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get_user(
    State(users): State<UserClient>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&raw_id)?;
    Ok(Json(users.get_user(id).await?))
}

pub async fn update_user(
    State(users): State<UserClient>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&raw_id)?;
    let payload = match parse_body(&body) {
        Ok(payload) => payload,
        Err(e) => {
            // An unknown id is reported ahead of a malformed body.
            users.get_user(id).await?;
            return Err(e);
        }
    };

    let update = UserUpdate {
        name: string_field(&payload, "name"),
        email: string_field(&payload, "email"),
    };
    Ok(Json(users.update_user(id, update).await?))
}

pub async fn delete_user(
    State(users): State<UserClient>,
    Path(raw_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&raw_id)?;
    if users.delete_user(id).await? {
        Ok(Json(json!({ "message": "User deleted successfully" })))
    } else {
        Err(ApiError::NotFound)
    }
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_field_ignores_non_strings() {
        let payload = json!({"name": "Ann", "email": 42, "extra": null});
        assert_eq!(string_field(&payload, "name").as_deref(), Some("Ann"));
        assert_eq!(string_field(&payload, "email"), None);
        assert_eq!(string_field(&payload, "missing"), None);
        assert_eq!(string_field(&json!([1, 2]), "name"), None);
    }

    #[test]
    fn malformed_ids_are_not_found() {
        assert_eq!(parse_id("12"), Ok(UserId(12)));
        assert_eq!(parse_id("abc"), Err(ApiError::NotFound));
        assert_eq!(parse_id("1.5"), Err(ApiError::NotFound));
        assert_eq!(parse_id("+1"), Err(ApiError::NotFound));
    }

    #[test]
    fn empty_body_is_invalid_json() {
        assert_eq!(parse_body(b""), Err(ApiError::InvalidJson));
        assert!(parse_body(br#"{"name": "x"}"#).is_ok());
    }
}

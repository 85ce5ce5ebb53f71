//! JSON error envelopes and the CORS layer applied to every response.

use crate::user_actor::UserError;
use axum::extract::Request;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE,
};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization, X-Requested-With, Accept, Origin";
/// Preflight cache lifetime, seconds.
pub const PREFLIGHT_MAX_AGE: &str = "86400";

/// A failed request, rendered as `{"error": "<message>"}`.
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("Invalid JSON")]
    InvalidJson,
    #[error("Missing name or email")]
    MissingFields,
    #[error("User not found")]
    NotFound,
    #[error("Service unavailable")]
    Unavailable,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson | ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::InvalidArgument(_) => ApiError::MissingFields,
            UserError::NotFound(_) => ApiError::NotFound,
            UserError::StoreUnavailable(reason) => {
                error!(%reason, "User store unavailable");
                ApiError::Unavailable
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Logs the request, answers preflights, and stamps CORS headers on every response.
pub async fn cors(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    info!(%method, path = request.uri().path(), "Incoming request");

    let mut response = if method == Method::OPTIONS {
        let mut preflight = StatusCode::OK.into_response();
        preflight.headers_mut().insert(
            ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from_static(PREFLIGHT_MAX_AGE),
        );
        preflight
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    response
}

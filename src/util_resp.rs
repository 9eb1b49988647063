//! Shared handler response plumbing: JSON success bodies and the small fixed
//! set of failure statuses the API speaks.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

pub type StandardResponse = Result<Json<serde_json::Value>, FailureResponse>;

pub fn success<T: Serialize>(value: &T) -> StandardResponse {
    let value = serde_json::to_value(value)
        .map_err(|e| FailureResponse::ServerError(e.to_string()))?;
    Ok(Json(value))
}

pub fn bad_request(msg: impl Into<String>) -> StandardResponse {
    Err(FailureResponse::BadRequest(msg.into()))
}

pub fn err_not_found(what: &str) -> StandardResponse {
    Err(FailureResponse::NotFound(format!("{what} not found")))
}

pub fn server_error(msg: impl Into<String>) -> StandardResponse {
    Err(FailureResponse::ServerError(msg.into()))
}

#[derive(Debug)]
pub enum FailureResponse {
    BadRequest(String),
    NotFound(String),
    ServerError(String),
}

impl IntoResponse for FailureResponse {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::ServerError(msg) => {
                tracing::error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        (status, Json(json!({ "error": msg }))).into_response()
    }
}

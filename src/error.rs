//! Typed errors and HTTP mapping.

use crate::service::ValidationErrors;
use crate::store::StoreError;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// Handler-level failure. `Display` is the raw underlying message; `description` is the
/// route's human-readable summary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String, description: &'static str },
    #[error("{errors}")]
    Validation { errors: ValidationErrors, description: &'static str },
    #[error("{message}")]
    NotFound { message: String, description: &'static str },
    #[error("{message}")]
    Internal { message: String, description: &'static str },
}

impl AppError {
    pub fn bad_request(err: impl Display, description: &'static str) -> Self {
        AppError::BadRequest {
            message: err.to_string(),
            description,
        }
    }

    pub fn validation(errors: ValidationErrors, description: &'static str) -> Self {
        AppError::Validation { errors, description }
    }

    pub fn not_found(err: impl Display, description: &'static str) -> Self {
        AppError::NotFound {
            message: err.to_string(),
            description,
        }
    }

    pub fn internal(err: impl Display, description: &'static str) -> Self {
        AppError::Internal {
            message: err.to_string(),
            description,
        }
    }

    /// `NotFound` from the store becomes 404 with `not_found`, anything else 500 with `internal`.
    pub fn from_store(err: StoreError, not_found: &'static str, internal: &'static str) -> Self {
        match err {
            StoreError::NotFound(message) => AppError::NotFound {
                message,
                description: not_found,
            },
            other => AppError::internal(other, internal),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AppError::BadRequest { description, .. }
            | AppError::Validation { description, .. }
            | AppError::NotFound { description, .. }
            | AppError::Internal { description, .. } => description,
        }
    }
}

/// Error envelope returned on every failed request.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    pub description: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, description = self.description(), "request failed");
        } else {
            tracing::debug!(error = %self, description = self.description(), status = %status, "request rejected");
        }
        let body = ErrorBody {
            error: self.to_string(),
            description: self.description().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Upper bound on how much of a non-JSON error body is kept as the `error` message.
const MAX_REWRITTEN_BODY: usize = 64 * 1024;

fn describe_status(status: StatusCode) -> &'static str {
    match status {
        StatusCode::PAYLOAD_TOO_LARGE => "request body too large",
        StatusCode::REQUEST_TIMEOUT => "request timed out",
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::NOT_FOUND => "not found",
        s if s.is_server_error() => "internal error",
        _ => "request failed",
    }
}

/// Response mapper: rewrites 4xx/5xx responses produced outside the handlers (body limit,
/// timeout, method mismatch, extractor rejections) into the [`ErrorBody`] envelope.
/// Responses that are already JSON pass through untouched.
pub async fn json_error_responses(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if is_json {
        return response;
    }

    let (parts, body) = response.into_parts();
    let text = axum::body::to_bytes(body, MAX_REWRITTEN_BODY)
        .await
        .map(|b| String::from_utf8_lossy(&b).trim().to_string())
        .unwrap_or_default();
    let error = if text.is_empty() {
        status.canonical_reason().unwrap_or("error").to_lowercase()
    } else {
        text
    };
    let description = describe_status(status);
    tracing::debug!(status = %status, error = %error, description, "rewrote error response");

    let mut rewritten = (status, Json(ErrorBody {
        error,
        description: description.to_string(),
    }))
        .into_response();
    for (name, value) in parts.headers.iter() {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            rewritten.headers_mut().insert(name.clone(), value.clone());
        }
    }
    rewritten
}

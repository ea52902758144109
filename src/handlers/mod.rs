//! HTTP handlers for gizmos and their widgets.

pub mod gizmo;
pub mod widget;
pub use gizmo::*;
pub use widget::*;

use crate::error::AppError;
use axum::extract::{rejection::PathRejection, Path};
use serde::de::DeserializeOwned;

/// Path extractor result, taken as-is so rejections (e.g. invalid UTF-8) map to [`AppError`].
pub type PathParams<T> = Result<Path<T>, PathRejection>;

fn path_params<T>(path: PathParams<T>, description: &'static str) -> Result<T, AppError> {
    path.map(|Path(params)| params)
        .map_err(|e| AppError::bad_request(e.body_text(), description))
}

fn path_id(path: PathParams<String>, description: &'static str) -> Result<i64, AppError> {
    parse_id(&path_params(path, description)?, description)
}

/// Parse a decimal i64 path segment; the parser's message becomes the error text.
fn parse_id(raw: &str, description: &'static str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|e| AppError::bad_request(e, description))
}

/// Decode a JSON body regardless of the request's content type.
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::bad_request(e, "failed to decode request body"))
}

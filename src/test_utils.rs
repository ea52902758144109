//! Helpers for driving the router in handler tests.

use crate::config::HttpConfig;
use crate::state::AppState;
use crate::store::memory::MemoryStore;
use crate::store::Store;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub fn app_with(store: MemoryStore) -> Router {
    app_with_config(store, HttpConfig::default())
}

pub fn app_with_config(store: MemoryStore, http: HttpConfig) -> Router {
    crate::router(AppState::new(store), &http)
}

/// Router over a store the test keeps a handle to, e.g. to arm failures after seeding.
pub fn app_with_shared(store: Arc<MemoryStore>) -> Router {
    let store: Arc<dyn Store> = store;
    crate::router(AppState { store }, &HttpConfig::default())
}

/// Send a request with an optional JSON body. An empty response body decodes as `Value::Null`.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = body.map(|v| v.to_string()).unwrap_or_default();
    send_raw(app, method, uri, &body).await
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

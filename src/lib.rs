//! Gizmo API: CRUD over gizmos and their widgets, backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use config::{Config, ConfigError, HttpConfig};
pub use error::{json_error_responses, AppError, ErrorBody};
pub use migration::apply_migrations;
pub use model::{Gizmo, NewGizmo, NewWidget, Widget};
pub use routes::{common_routes, gizmo_routes};
pub use state::AppState;
pub use store::{PgStore, Store, StoreError};

use axum::{http::Uri, middleware, Router};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("no route for {}", uri.path()), "route not found")
}

/// Full application router: health, gizmo and widget routes, JSON 404 fallback, HTTP layers.
///
/// Layers from the outside in: trace, JSON error mapping, body limit, timeout. The error
/// mapper sits outside the limit and timeout layers so their 413/408 responses get the
/// JSON envelope too.
pub fn router(state: AppState, http: &HttpConfig) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(gizmo_routes(state))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(RequestBodyLimitLayer::new(http.max_body_bytes))
                .layer(TimeoutLayer::new(http.request_timeout)),
        )
        .layer(middleware::map_response(json_error_responses))
        .layer(TraceLayer::new_for_http())
}

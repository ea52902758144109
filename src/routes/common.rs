//! Common routes: health.

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    ok: bool,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { ok: true })
}

/// GET /health. Stateless; does not touch the database.
pub fn common_routes() -> Router {
    Router::new().route("/health", get(health))
}

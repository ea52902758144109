//! Gizmo and widget routes.
//! Path segments are captured as strings so handlers can answer malformed ids with their own 400 body.

use crate::handlers::{create_gizmo, create_widget, delete_gizmo, delete_widget, get_gizmo, list_gizmos, list_widgets};
use crate::state::AppState;
use axum::{routing::delete, routing::get, Router};

pub fn gizmo_routes(state: AppState) -> Router {
    Router::new()
        .route("/gizmos", get(list_gizmos).post(create_gizmo))
        .route("/gizmos/:gizmo_id", get(get_gizmo).delete(delete_gizmo))
        .route("/gizmos/:gizmo_id/widgets", get(list_widgets).post(create_widget))
        .route("/gizmos/:gizmo_id/widgets/:widget_id", delete(delete_widget))
        .with_state(state)
}

//! Widget handlers, always scoped to an owning gizmo.

use super::{parse_body, parse_id, path_id, path_params, PathParams};
use crate::error::AppError;
use crate::model::NewWidget;
use crate::response::{no_content, success_ok};
use crate::service::Validate;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    response::IntoResponse,
};

/// 404 unless the gizmo exists. Not transactional with whatever the caller does next.
async fn ensure_gizmo(state: &AppState, gizmo_id: i64) -> Result<(), AppError> {
    let exists = state
        .store
        .gizmo_exists(gizmo_id)
        .await
        .map_err(|e| AppError::internal(e, "failed to fetch gizmo"))?;
    if !exists {
        return Err(AppError::not_found("not found", "gizmo not found"));
    }
    Ok(())
}

pub async fn list_widgets(
    State(state): State<AppState>,
    path: PathParams<String>,
) -> Result<impl IntoResponse, AppError> {
    let gizmo_id = path_id(path, "invalid ID")?;
    ensure_gizmo(&state, gizmo_id).await?;
    let widgets = state
        .store
        .list_widgets(gizmo_id)
        .await
        .map_err(|e| AppError::internal(e, "failed to fetch widgets"))?;
    Ok(success_ok(widgets))
}

pub async fn create_widget(
    State(state): State<AppState>,
    path: PathParams<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let gizmo_id = path_id(path, "invalid ID")?;
    // Existence is checked before the body is looked at.
    ensure_gizmo(&state, gizmo_id).await?;
    let new: NewWidget = parse_body(&body)?;
    new.validate().map_err(|e| AppError::validation(e, "invalid widget"))?;
    let widget = state
        .store
        .insert_widget(gizmo_id, &new)
        .await
        .map_err(|e| AppError::internal(e, "failed to insert widget"))?;
    tracing::info!(id = widget.id, gizmo_id, "widget created");
    Ok(success_ok(widget))
}

pub async fn delete_widget(
    State(state): State<AppState>,
    path: PathParams<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let (gizmo_id, id) = path_params(path, "invalid ID")?;
    let gizmo_id = parse_id(&gizmo_id, "invalid gizmo ID")?;
    let id = parse_id(&id, "invalid ID")?;
    let affected = state
        .store
        .delete_widget(gizmo_id, id)
        .await
        .map_err(|e| AppError::internal(e, "failed to delete widget"))?;
    if affected == 0 {
        return Err(AppError::not_found("not found", "widget not found"));
    }
    tracing::info!(id, gizmo_id, "widget deleted");
    Ok(no_content())
}

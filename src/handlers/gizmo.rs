//! Gizmo handlers: list, create, read, cascading delete.

use super::{parse_body, path_id, PathParams};
use crate::error::AppError;
use crate::model::NewGizmo;
use crate::response::{no_content, success_ok};
use crate::service::Validate;
use crate::state::AppState;
use crate::store::StoreError;
use axum::{
    body::Bytes,
    extract::State,
    response::IntoResponse,
};

pub async fn list_gizmos(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let gizmos = state
        .store
        .list_gizmos()
        .await
        .map_err(|e| AppError::internal(e, "failed to fetch gizmos"))?;
    Ok(success_ok(gizmos))
}

pub async fn create_gizmo(State(state): State<AppState>, body: Bytes) -> Result<impl IntoResponse, AppError> {
    let new: NewGizmo = parse_body(&body)?;
    new.validate().map_err(|e| AppError::validation(e, "invalid gizmo"))?;
    let gizmo = state
        .store
        .insert_gizmo(&new)
        .await
        .map_err(|e| AppError::internal(e, "failed to insert gizmo"))?;
    tracing::info!(id = gizmo.id, "gizmo created");
    Ok(success_ok(gizmo))
}

pub async fn get_gizmo(
    State(state): State<AppState>,
    path: PathParams<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path, "invalid ID")?;
    let gizmo = state
        .store
        .get_gizmo(id)
        .await
        .map_err(|e| AppError::from_store(e, "gizmo not found", "failed to fetch gizmo"))?;
    Ok(success_ok(gizmo))
}

pub async fn delete_gizmo(
    State(state): State<AppState>,
    path: PathParams<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path, "invalid ID")?;
    let affected = state.store.delete_gizmo(id).await.map_err(|e| {
        let description = match &e {
            StoreError::Cascade { step, .. } => step.description(),
            _ => "failed to delete gizmo",
        };
        AppError::internal(e, description)
    })?;
    if affected == 0 {
        return Err(AppError::not_found("not found", "gizmo not found"));
    }
    tracing::info!(id, "gizmo deleted");
    Ok(no_content())
}

//! Row and payload types for gizmos and widgets.

use serde::{Deserialize, Serialize};

/// A persisted gizmo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Gizmo {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// A persisted widget. Serialized with `gizmoId`; stored as `gizmo_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: i64,
    pub gizmo_id: i64,
    pub name: String,
}

/// Body of `POST /gizmos`. Missing fields decode as empty and are rejected by validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewGizmo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Body of `POST /gizmos/{id}/widgets`. The owning gizmo always comes from the path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewWidget {
    #[serde(default)]
    pub name: String,
}

//! Relational storage for gizmos and widgets.
//!
//! Handlers only see the [`Store`] trait; [`PgStore`] is the PostgreSQL implementation.

mod postgres;

#[cfg(test)]
pub(crate) mod memory;

pub use postgres::{delete_gizmo_by_id, delete_widgets_by_gizmo, PgStore};

use crate::model::{Gizmo, NewGizmo, NewWidget, Widget};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Step of the cascading gizmo delete that failed. The transaction is rolled back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeStep {
    Begin,
    DeleteWidgets,
    DeleteGizmo,
    Commit,
}

impl CascadeStep {
    pub fn description(self) -> &'static str {
        match self {
            CascadeStep::Begin => "failed to start transaction",
            CascadeStep::DeleteWidgets => "failed to delete gizmo widgets",
            CascadeStep::DeleteGizmo => "failed to delete gizmo",
            CascadeStep::Commit => "failed to commit transaction",
        }
    }
}

impl fmt::Display for CascadeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CascadeStep::Begin => "begin",
            CascadeStep::DeleteWidgets => "delete widgets",
            CascadeStep::DeleteGizmo => "delete gizmo",
            CascadeStep::Commit => "commit",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    /// The query expected a row and found none. Carries the driver's message.
    #[error("{0}")]
    NotFound(String),
    #[error("{source}")]
    Cascade { step: CascadeStep, source: sqlx::Error },
    #[error(transparent)]
    Db(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => StoreError::NotFound(e.to_string()),
            other => StoreError::Db(other),
        }
    }
}

#[async_trait]
pub trait Store: Send + Sync + 'static {
    async fn list_gizmos(&self) -> Result<Vec<Gizmo>, StoreError>;

    async fn insert_gizmo(&self, gizmo: &NewGizmo) -> Result<Gizmo, StoreError>;

    /// Fails with [`StoreError::NotFound`] when no gizmo has this id.
    async fn get_gizmo(&self, id: i64) -> Result<Gizmo, StoreError>;

    async fn gizmo_exists(&self, id: i64) -> Result<bool, StoreError>;

    /// Deletes the gizmo's widgets and then the gizmo in one transaction.
    /// Returns the number of gizmo rows deleted (0 or 1).
    async fn delete_gizmo(&self, id: i64) -> Result<u64, StoreError>;

    async fn list_widgets(&self, gizmo_id: i64) -> Result<Vec<Widget>, StoreError>;

    async fn insert_widget(&self, gizmo_id: i64, widget: &NewWidget) -> Result<Widget, StoreError>;

    /// Deletes only when both ids match. Returns rows affected.
    async fn delete_widget(&self, gizmo_id: i64, id: i64) -> Result<u64, StoreError>;
}

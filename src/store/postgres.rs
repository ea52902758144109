//! PostgreSQL-backed [`Store`].

use super::{CascadeStep, Store, StoreError};
use crate::model::{Gizmo, NewGizmo, NewWidget, Widget};
use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Delete every widget owned by `gizmo_id`. Call within the cascade transaction.
pub async fn delete_widgets_by_gizmo(conn: &mut PgConnection, gizmo_id: i64) -> Result<u64, sqlx::Error> {
    let sql = "DELETE FROM widgets WHERE gizmo_id = $1";
    tracing::debug!(sql = %sql, gizmo_id, "query (tx)");
    let result = sqlx::query(sql).bind(gizmo_id).execute(&mut *conn).await?;
    Ok(result.rows_affected())
}

/// Delete one gizmo row. Call within the cascade transaction, after its widgets are gone.
pub async fn delete_gizmo_by_id(conn: &mut PgConnection, id: i64) -> Result<u64, sqlx::Error> {
    let sql = "DELETE FROM gizmos WHERE id = $1";
    tracing::debug!(sql = %sql, id, "query (tx)");
    let result = sqlx::query(sql).bind(id).execute(&mut *conn).await?;
    Ok(result.rows_affected())
}

fn cascade(step: CascadeStep) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |source| StoreError::Cascade { step, source }
}

#[async_trait]
impl Store for PgStore {
    async fn list_gizmos(&self) -> Result<Vec<Gizmo>, StoreError> {
        let sql = "SELECT id, name, description FROM gizmos ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Gizmo>(sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn insert_gizmo(&self, gizmo: &NewGizmo) -> Result<Gizmo, StoreError> {
        let sql = "INSERT INTO gizmos (name, description) VALUES ($1, $2) RETURNING id, name, description";
        tracing::debug!(sql = %sql, name = %gizmo.name, "query");
        let row = sqlx::query_as::<_, Gizmo>(sql)
            .bind(&gizmo.name)
            .bind(&gizmo.description)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn get_gizmo(&self, id: i64) -> Result<Gizmo, StoreError> {
        let sql = "SELECT id, name, description FROM gizmos WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Gizmo>(sql).bind(id).fetch_one(&self.pool).await?;
        Ok(row)
    }

    async fn gizmo_exists(&self, id: i64) -> Result<bool, StoreError> {
        let sql = "SELECT EXISTS (SELECT 1 FROM gizmos WHERE id = $1)";
        tracing::debug!(sql = %sql, id, "query");
        let exists: bool = sqlx::query_scalar(sql).bind(id).fetch_one(&self.pool).await?;
        Ok(exists)
    }

    async fn delete_gizmo(&self, id: i64) -> Result<u64, StoreError> {
        // Dropping `tx` on any early return rolls the whole cascade back.
        let mut tx = self.pool.begin().await.map_err(cascade(CascadeStep::Begin))?;
        let widgets = delete_widgets_by_gizmo(&mut *tx, id)
            .await
            .map_err(cascade(CascadeStep::DeleteWidgets))?;
        let affected = delete_gizmo_by_id(&mut *tx, id)
            .await
            .map_err(cascade(CascadeStep::DeleteGizmo))?;
        tx.commit().await.map_err(cascade(CascadeStep::Commit))?;
        tracing::debug!(id, widgets, affected, "gizmo cascade committed");
        Ok(affected)
    }

    async fn list_widgets(&self, gizmo_id: i64) -> Result<Vec<Widget>, StoreError> {
        let sql = "SELECT id, gizmo_id, name FROM widgets WHERE gizmo_id = $1 ORDER BY id";
        tracing::debug!(sql = %sql, gizmo_id, "query");
        let rows = sqlx::query_as::<_, Widget>(sql)
            .bind(gizmo_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert_widget(&self, gizmo_id: i64, widget: &NewWidget) -> Result<Widget, StoreError> {
        let sql = "INSERT INTO widgets (gizmo_id, name) VALUES ($1, $2) RETURNING id, gizmo_id, name";
        tracing::debug!(sql = %sql, gizmo_id, name = %widget.name, "query");
        let row = sqlx::query_as::<_, Widget>(sql)
            .bind(gizmo_id)
            .bind(&widget.name)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_widget(&self, gizmo_id: i64, id: i64) -> Result<u64, StoreError> {
        let sql = "DELETE FROM widgets WHERE gizmo_id = $1 AND id = $2";
        tracing::debug!(sql = %sql, gizmo_id, id, "query");
        let result = sqlx::query(sql).bind(gizmo_id).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

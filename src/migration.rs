//! Idempotent DDL for the gizmo and widget tables.

use sqlx::PgPool;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS gizmos (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS widgets (
        id BIGSERIAL PRIMARY KEY,
        gizmo_id BIGINT NOT NULL REFERENCES gizmos (id),
        name TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS widgets_gizmo_id_idx ON widgets (gizmo_id)",
];

/// Create `gizmos` and `widgets` if they do not exist. Safe to run on every startup.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    for sql in STATEMENTS {
        sqlx::query(sql).execute(pool).await?;
    }
    tracing::info!("schema up to date");
    Ok(())
}

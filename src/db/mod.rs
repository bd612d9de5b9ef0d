pub mod models;

use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;

pub async fn create_pool(db_path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_millis(5000));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::query("PRAGMA journal_mode=WAL;")
        .execute(pool)
        .await?;

    // Create tasks table
    // AUTOINCREMENT keeps rowids monotonic so ids are never reused after a
    // hard delete.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            text TEXT NOT NULL,
            completed BOOLEAN NOT NULL DEFAULT 0,
            is_deleted BOOLEAN NOT NULL DEFAULT 0,
            CHECK (text != '')
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Index for the active/trashed list views (filtered by is_deleted,
    // ordered by id)
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_tasks_is_deleted
        ON tasks(is_deleted, id)
        "#,
    )
    .execute(pool)
    .await?;

    // Create meta table for schema bookkeeping
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS meta (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO meta (key, value)
        VALUES ('schema_version', '1')
        ON CONFLICT(key) DO UPDATE SET value = '1'
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

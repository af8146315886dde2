use std::path::Path;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

/// Opens a single-file SQLite store, creating the file (and its parent
/// directory) if missing.
///
/// The pool is capped at one connection: each store is a process-wide
/// handle reused for every query, and concurrent writers are serialized
/// by SQLite itself rather than by this service.
pub async fn create_pool(path: &str) -> Result<SqlitePool> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    info!("SQLite store opened at {path}");
    Ok(pool)
}

/// Creates the resume store schema if it does not exist. The schema is
/// fixed and implicit: there are no migrations, matching the stores'
/// create-on-first-use lifecycle.
///
/// `analyses.resume_id` references `resumes.id` by convention only; no
/// FOREIGN KEY constraint is declared.
pub async fn init_resume_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS resumes (
            id BLOB PRIMARY KEY,
            file_name TEXT NOT NULL,
            skills TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS analyses (
            id BLOB PRIMARY KEY,
            resume_id BLOB NOT NULL,
            ats_score REAL NOT NULL,
            keyword_match_score REAL NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Creates the feedback store schema if it does not exist.
pub async fn init_feedback_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS feedback (
            id BLOB PRIMARY KEY,
            rating INTEGER NOT NULL,
            usability_score INTEGER NOT NULL,
            feature_satisfaction INTEGER NOT NULL,
            missing_features TEXT NOT NULL DEFAULT '',
            improvement_suggestions TEXT NOT NULL DEFAULT '',
            user_experience TEXT NOT NULL DEFAULT '',
            submitted_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

//! SQLite store adapters backed by sqlx.
//!
//! The schema is bootstrapped on startup with idempotent DDL, so a fresh
//! database file is usable immediately.

mod report_store;
mod session_store;

pub use report_store::SqliteReportStore;
pub use session_store::SqliteSessionStore;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::domain::foundation::InterviewError;

/// Opens (and creates if missing) the SQLite database at `url`.
///
/// WAL mode plus a busy timeout lets concurrent request handlers queue on
/// the single SQLite writer instead of failing immediately.
pub async fn connect(url: &str) -> Result<SqlitePool, InterviewError> {
    let options = SqliteConnectOptions::from_str(url)
        .map_err(InterviewError::storage)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(InterviewError::storage)
}

/// Creates the tables if they do not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), InterviewError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id TEXT PRIMARY KEY,
            stack_description TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(InterviewError::storage)?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS answers (
            session_id TEXT NOT NULL REFERENCES sessions(id) ON DELETE CASCADE,
            question_index INTEGER NOT NULL,
            text TEXT NOT NULL,
            answered_at TEXT NOT NULL,
            PRIMARY KEY (session_id, question_index)
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(InterviewError::storage)?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS analysis_reports (
            session_id TEXT PRIMARY KEY REFERENCES sessions(id) ON DELETE CASCADE,
            content TEXT NOT NULL,
            model TEXT NOT NULL,
            generated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(InterviewError::storage)?;

    Ok(())
}

//! SQLite implementation of ReportStore.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePool;
use sqlx::Row;

use crate::domain::analysis::AnalysisReport;
use crate::domain::foundation::{InterviewError, SessionId, Timestamp};
use crate::ports::ReportStore;

/// SQLite-backed report store, one row per session.
#[derive(Clone)]
pub struct SqliteReportStore {
    pool: SqlitePool,
}

impl SqliteReportStore {
    /// Creates a new store over an initialized pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportStore for SqliteReportStore {
    async fn save(&self, report: &AnalysisReport) -> Result<(), InterviewError> {
        sqlx::query(
            r#"
            INSERT INTO analysis_reports (session_id, content, model, generated_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(session_id) DO UPDATE SET
                content = excluded.content,
                model = excluded.model,
                generated_at = excluded.generated_at
            "#,
        )
        .bind(report.session_id().to_string())
        .bind(report.content())
        .bind(report.model())
        .bind(report.generated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(InterviewError::storage)?;

        Ok(())
    }

    async fn find_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<AnalysisReport>, InterviewError> {
        let row = sqlx::query(
            r#"
            SELECT content, model, generated_at
            FROM analysis_reports
            WHERE session_id = ?1
            "#,
        )
        .bind(session_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(InterviewError::storage)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let content: String = row.try_get("content").map_err(InterviewError::storage)?;
        let model: String = row.try_get("model").map_err(InterviewError::storage)?;
        let generated_at: DateTime<Utc> = row
            .try_get("generated_at")
            .map_err(InterviewError::storage)?;

        Ok(Some(AnalysisReport::reconstitute(
            *session_id,
            content,
            model,
            Timestamp::from_datetime(generated_at),
        )))
    }
}

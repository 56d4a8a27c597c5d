//! SQLite implementation of SessionStore.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use crate::domain::foundation::{InterviewError, SessionId, Timestamp};
use crate::domain::interview::{Answer, InterviewStatus, Session};
use crate::ports::{SessionPage, SessionStore, SessionSummary};

/// SQLite-backed session store.
///
/// Answers live in their own table keyed by `(session_id, question_index)`.
/// `append_answer` re-checks the answer count inside a transaction; the
/// primary key makes a lost race surface as a constraint violation instead
/// of a duplicate row, so ordering can never be corrupted.
#[derive(Clone)]
pub struct SqliteSessionStore {
    pool: SqlitePool,
}

impl SqliteSessionStore {
    /// Creates a new store over an initialized pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn load_answers(&self, id: &SessionId) -> Result<Vec<Answer>, InterviewError> {
        let rows = sqlx::query(
            r#"
            SELECT question_index, text, answered_at
            FROM answers
            WHERE session_id = ?1
            ORDER BY question_index ASC
            "#,
        )
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(InterviewError::storage)?;

        rows.into_iter().map(row_to_answer).collect()
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn create(&self, session: &Session) -> Result<(), InterviewError> {
        sqlx::query(
            r#"
            INSERT INTO sessions (id, stack_description, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(session.id().to_string())
        .bind(session.stack_description())
        .bind(session.created_at().as_datetime())
        .bind(session.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(InterviewError::storage)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, InterviewError> {
        let row = sqlx::query(
            r#"
            SELECT id, stack_description, created_at, updated_at
            FROM sessions
            WHERE id = ?1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(InterviewError::storage)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let answers = self.load_answers(id).await?;
        Ok(Some(row_to_session(row, answers)?))
    }

    async fn append_answer(
        &self,
        id: &SessionId,
        index: usize,
        text: &str,
    ) -> Result<Session, InterviewError> {
        let now = Timestamp::now();

        let mut tx = self.pool.begin().await.map_err(InterviewError::storage)?;

        let exists: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM sessions WHERE id = ?1")
            .bind(id.to_string())
            .fetch_optional(&mut *tx)
            .await
            .map_err(InterviewError::storage)?;
        if exists.is_none() {
            return Err(InterviewError::NotFound(*id));
        }

        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM answers WHERE session_id = ?1")
                .bind(id.to_string())
                .fetch_one(&mut *tx)
                .await
                .map_err(InterviewError::storage)?;
        let current = count as usize;

        if current >= crate::domain::interview::QUESTION_COUNT {
            return Err(InterviewError::AlreadyComplete);
        }
        if index != current {
            return Err(InterviewError::OutOfOrderAnswer {
                submitted: index,
                expected: current,
            });
        }

        let insert = sqlx::query(
            r#"
            INSERT INTO answers (session_id, question_index, text, answered_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(id.to_string())
        .bind(index as i64)
        .bind(text)
        .bind(now.as_datetime())
        .execute(&mut *tx)
        .await;

        if let Err(e) = insert {
            // A concurrent writer won the race for this index; the primary
            // key rejects the duplicate.
            if matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation()) {
                return Err(InterviewError::OutOfOrderAnswer {
                    submitted: index,
                    expected: index + 1,
                });
            }
            return Err(InterviewError::storage(e));
        }

        sqlx::query("UPDATE sessions SET updated_at = ?2 WHERE id = ?1")
            .bind(id.to_string())
            .bind(now.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(InterviewError::storage)?;

        tx.commit().await.map_err(InterviewError::storage)?;

        self.find_by_id(id)
            .await?
            .ok_or(InterviewError::NotFound(*id))
    }

    async fn list_recent(&self, limit: u32, offset: u32) -> Result<SessionPage, InterviewError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sessions")
            .fetch_one(&self.pool)
            .await
            .map_err(InterviewError::storage)?;

        let rows = sqlx::query(
            r#"
            SELECT s.id, s.stack_description, s.created_at, s.updated_at,
                   COUNT(a.question_index) AS answer_count
            FROM sessions s
            LEFT JOIN answers a ON a.session_id = s.id
            GROUP BY s.id, s.stack_description, s.created_at, s.updated_at
            ORDER BY s.created_at DESC
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(InterviewError::storage)?;

        let items: Result<Vec<SessionSummary>, InterviewError> =
            rows.into_iter().map(row_to_summary).collect();

        Ok(SessionPage {
            items: items?,
            total: total as u64,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Row mapping
// ════════════════════════════════════════════════════════════════════════════

fn get_timestamp(row: &SqliteRow, column: &str) -> Result<Timestamp, InterviewError> {
    let dt: DateTime<Utc> = row.try_get(column).map_err(InterviewError::storage)?;
    Ok(Timestamp::from_datetime(dt))
}

fn get_session_id(row: &SqliteRow) -> Result<SessionId, InterviewError> {
    let id: String = row.try_get("id").map_err(InterviewError::storage)?;
    id.parse().map_err(InterviewError::storage)
}

fn row_to_answer(row: SqliteRow) -> Result<Answer, InterviewError> {
    let index: i64 = row
        .try_get("question_index")
        .map_err(InterviewError::storage)?;
    let text: String = row.try_get("text").map_err(InterviewError::storage)?;
    let answered_at = get_timestamp(&row, "answered_at")?;
    Ok(Answer::reconstitute(index as usize, text, answered_at))
}

fn row_to_session(row: SqliteRow, answers: Vec<Answer>) -> Result<Session, InterviewError> {
    Ok(Session::reconstitute(
        get_session_id(&row)?,
        row.try_get("stack_description")
            .map_err(InterviewError::storage)?,
        answers,
        get_timestamp(&row, "created_at")?,
        get_timestamp(&row, "updated_at")?,
    ))
}

fn row_to_summary(row: SqliteRow) -> Result<SessionSummary, InterviewError> {
    let answer_count: i64 = row
        .try_get("answer_count")
        .map_err(InterviewError::storage)?;

    Ok(SessionSummary {
        id: get_session_id(&row)?,
        status: InterviewStatus::from_answer_count(answer_count as usize),
        answer_count: answer_count as usize,
        stack_description: row
            .try_get("stack_description")
            .map_err(InterviewError::storage)?,
        created_at: get_timestamp(&row, "created_at")?,
        updated_at: get_timestamp(&row, "updated_at")?,
    })
}

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use vetrina_core::error::AppError;
use vetrina_core::models::{ContactSubmission, NewContactSubmission};

/// Repository for contact form submissions in SQLite.
#[derive(Clone)]
pub struct ContactRepository {
    pool: SqlitePool,
}

impl ContactRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all submissions, oldest first.
    pub async fn list(&self) -> Result<Vec<ContactSubmission>, AppError> {
        let rows = sqlx::query_as::<_, ContactSubmissionRow>(
            r#"SELECT id, name, email, message, created_at FROM contact_submissions ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Insert a new submission, stamped with the current time.
    pub async fn insert(
        &self,
        submission: &NewContactSubmission,
    ) -> Result<ContactSubmission, AppError> {
        let row = sqlx::query_as::<_, ContactSubmissionRow>(
            r#"
            INSERT INTO contact_submissions (name, email, message, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, email, message, created_at
            "#,
        )
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.message)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.into())
    }

    /// Delete a submission by id. Returns false when no row matched.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(r#"DELETE FROM contact_submissions WHERE id = ?"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct ContactSubmissionRow {
    id: i64,
    name: String,
    email: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl From<ContactSubmissionRow> for ContactSubmission {
    fn from(row: ContactSubmissionRow) -> Self {
        ContactSubmission {
            id: row.id,
            name: row.name,
            email: row.email,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

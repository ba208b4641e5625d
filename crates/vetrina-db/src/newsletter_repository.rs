use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use vetrina_core::error::AppError;
use vetrina_core::models::{NewSubscriber, NewsletterSubscriber};

/// Repository for newsletter subscriptions in SQLite.
#[derive(Clone)]
pub struct NewsletterRepository {
    pool: SqlitePool,
}

impl NewsletterRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all subscribers, oldest first.
    pub async fn list(&self) -> Result<Vec<NewsletterSubscriber>, AppError> {
        let rows = sqlx::query_as::<_, SubscriberRow>(
            r#"SELECT id, email, subscribed_at FROM newsletter_subscribers ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Look up a subscriber by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<NewsletterSubscriber>, AppError> {
        let row = sqlx::query_as::<_, SubscriberRow>(
            r#"SELECT id, email, subscribed_at FROM newsletter_subscribers WHERE email = ?"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// Insert a new subscription, stamped with the current time.
    ///
    /// The email column carries a UNIQUE constraint, so a concurrent duplicate
    /// that slips past the handler's lookup still surfaces as a conflict.
    pub async fn insert(
        &self,
        subscriber: &NewSubscriber,
    ) -> Result<NewsletterSubscriber, AppError> {
        let row = sqlx::query_as::<_, SubscriberRow>(
            r#"
            INSERT INTO newsletter_subscribers (email, subscribed_at)
            VALUES (?, ?)
            RETURNING id, email, subscribed_at
            "#,
        )
        .bind(&subscriber.email)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                AppError::Conflict("Email already subscribed".into())
            } else {
                AppError::Database(e.to_string())
            }
        })?;

        Ok(row.into())
    }

    /// Delete a subscriber by id. Returns false when no row matched.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(r#"DELETE FROM newsletter_subscribers WHERE id = ?"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct SubscriberRow {
    id: i64,
    email: String,
    subscribed_at: DateTime<Utc>,
}

impl From<SubscriberRow> for NewsletterSubscriber {
    fn from(row: SubscriberRow) -> Self {
        NewsletterSubscriber {
            id: row.id,
            email: row.email,
            subscribed_at: row.subscribed_at,
        }
    }
}

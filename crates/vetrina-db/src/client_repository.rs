use sqlx::SqlitePool;

use vetrina_core::error::AppError;
use vetrina_core::models::{Client, ClientPatch, NewClient};

/// Repository for client testimonial persistence in SQLite.
#[derive(Clone)]
pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all client testimonials, oldest first.
    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        let rows = sqlx::query_as::<_, ClientRow>(
            r#"SELECT id, name, testimonial, image_url, rating FROM clients ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a client by id.
    pub async fn get(&self, id: i64) -> Result<Option<Client>, AppError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"SELECT id, name, testimonial, image_url, rating FROM clients WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// Insert a new client testimonial. Returns it with its assigned id.
    pub async fn insert(&self, client: &NewClient) -> Result<Client, AppError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            INSERT INTO clients (name, testimonial, image_url, rating)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, testimonial, image_url, rating
            "#,
        )
        .bind(&client.name)
        .bind(&client.testimonial)
        .bind(&client.image_url)
        .bind(client.rating)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.into())
    }

    /// Apply a partial update. Returns `None` when the id has no matching row.
    pub async fn update(&self, id: i64, patch: &ClientPatch) -> Result<Option<Client>, AppError> {
        let Some(mut client) = self.get(id).await? else {
            return Ok(None);
        };
        patch.apply(&mut client);

        sqlx::query(
            r#"
            UPDATE clients
            SET name = ?, testimonial = ?, image_url = ?, rating = ?
            WHERE id = ?
            "#,
        )
        .bind(&client.name)
        .bind(&client.testimonial)
        .bind(&client.image_url)
        .bind(client.rating)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(Some(client))
    }

    /// Delete a client by id. Returns false when no row matched.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(r#"DELETE FROM clients WHERE id = ?"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct ClientRow {
    id: i64,
    name: String,
    testimonial: String,
    image_url: Option<String>,
    rating: i64,
}

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Client {
            id: row.id,
            name: row.name,
            testimonial: row.testimonial,
            image_url: row.image_url,
            rating: row.rating,
        }
    }
}

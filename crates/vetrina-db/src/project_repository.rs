use sqlx::SqlitePool;

use vetrina_core::error::AppError;
use vetrina_core::models::{NewProject, Project, ProjectPatch};

/// Repository for project persistence in SQLite.
#[derive(Clone)]
pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all projects, oldest first.
    pub async fn list(&self) -> Result<Vec<Project>, AppError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"SELECT id, title, description, image_url, link FROM projects ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a project by id.
    pub async fn get(&self, id: i64) -> Result<Option<Project>, AppError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"SELECT id, title, description, image_url, link FROM projects WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// Insert a new project. Returns it with its store-assigned id.
    pub async fn insert(&self, project: &NewProject) -> Result<Project, AppError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            INSERT INTO projects (title, description, image_url, link)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, description, image_url, link
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_url)
        .bind(&project.link)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.into())
    }

    /// Apply a partial update. Fields absent from the patch keep their prior
    /// value. Returns `None` when the id has no matching row.
    pub async fn update(&self, id: i64, patch: &ProjectPatch) -> Result<Option<Project>, AppError> {
        let Some(mut project) = self.get(id).await? else {
            return Ok(None);
        };
        patch.apply(&mut project);

        sqlx::query(
            r#"
            UPDATE projects
            SET title = ?, description = ?, image_url = ?, link = ?
            WHERE id = ?
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_url)
        .bind(&project.link)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(Some(project))
    }

    /// Delete a project by id. Returns false when no row matched.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(r#"DELETE FROM projects WHERE id = ?"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: i64,
    title: String,
    description: String,
    image_url: Option<String>,
    link: Option<String>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            link: row.link,
        }
    }
}

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    entities::project::{ProjectForm, ProjectRow},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, form: &ProjectForm) -> Result<i64, AppError>;
    async fn get(&self, id: i64) -> Result<ProjectRow, AppError>;
    async fn list(&self) -> Result<Vec<ProjectRow>, AppError>;
    async fn list_featured(&self) -> Result<Vec<ProjectRow>, AppError>;
    async fn update(&self, id: i64, form: &ProjectForm) -> Result<(), AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn create(&self, form: &ProjectForm) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO projects (
                title, description, detailed_description, technologies, features,
                images, project_url, github_url, is_featured, order_index, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(&form.title)
        .bind(&form.description)
        .bind(&form.detailed_description)
        .bind(form.technologies_json())
        .bind(form.features_json())
        .bind(form.images_json())
        .bind(&form.project_url)
        .bind(&form.github_url)
        .bind(form.is_featured)
        .bind(form.order_index)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(result.last_insert_rowid())
    }

    async fn get(&self, id: i64) -> Result<ProjectRow, AppError> {
        sqlx::query_as::<_, ProjectRow>("SELECT * FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    async fn list(&self) -> Result<Vec<ProjectRow>, AppError> {
        sqlx::query_as::<_, ProjectRow>("SELECT * FROM projects ORDER BY order_index, id")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn list_featured(&self) -> Result<Vec<ProjectRow>, AppError> {
        sqlx::query_as::<_, ProjectRow>(
            "SELECT * FROM projects WHERE is_featured = TRUE ORDER BY order_index, id"
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn update(&self, id: i64, form: &ProjectForm) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE projects SET
                title = ?, description = ?, detailed_description = ?,
                technologies = ?, features = ?, images = ?,
                project_url = ?, github_url = ?, is_featured = ?, order_index = ?
            WHERE id = ?
            "#
        )
        .bind(&form.title)
        .bind(&form.description)
        .bind(&form.detailed_description)
        .bind(form.technologies_json())
        .bind(form.features_json())
        .bind(form.images_json())
        .bind(&form.project_url)
        .bind(&form.github_url)
        .bind(form.is_featured)
        .bind(form.order_index)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Project not found".to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Project not found".to_string()));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)
    }
}

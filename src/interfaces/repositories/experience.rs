use async_trait::async_trait;
use chrono::Utc;

use crate::{
    entities::experience::{ExperienceForm, ExperienceRow},
    errors::AppError,
    repositories::sqlx_repo::SqlxExperienceRepo,
};

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn create(&self, form: &ExperienceForm) -> Result<i64, AppError>;
    async fn get(&self, id: i64) -> Result<ExperienceRow, AppError>;
    async fn list(&self) -> Result<Vec<ExperienceRow>, AppError>;
    async fn update(&self, id: i64, form: &ExperienceForm) -> Result<(), AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

impl SqlxExperienceRepo {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        SqlxExperienceRepo { pool }
    }
}

#[async_trait]
impl ExperienceRepository for SqlxExperienceRepo {
    async fn create(&self, form: &ExperienceForm) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO experiences (
                job_title, company, location, start_date, end_date,
                is_current, description, responsibilities, order_index, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(&form.job_title)
        .bind(&form.company)
        .bind(&form.location)
        .bind(&form.start_date)
        .bind(&form.end_date)
        .bind(form.is_current)
        .bind(&form.description)
        .bind(form.responsibilities_json())
        .bind(form.order_index)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(result.last_insert_rowid())
    }

    async fn get(&self, id: i64) -> Result<ExperienceRow, AppError> {
        sqlx::query_as::<_, ExperienceRow>("SELECT * FROM experiences WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound("Experience not found".to_string()))
    }

    async fn list(&self) -> Result<Vec<ExperienceRow>, AppError> {
        sqlx::query_as::<_, ExperienceRow>(
            "SELECT * FROM experiences ORDER BY order_index, id"
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn update(&self, id: i64, form: &ExperienceForm) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE experiences SET
                job_title = ?, company = ?, location = ?, start_date = ?,
                end_date = ?, is_current = ?, description = ?,
                responsibilities = ?, order_index = ?
            WHERE id = ?
            "#
        )
        .bind(&form.job_title)
        .bind(&form.company)
        .bind(&form.location)
        .bind(&form.start_date)
        .bind(&form.end_date)
        .bind(form.is_current)
        .bind(&form.description)
        .bind(form.responsibilities_json())
        .bind(form.order_index)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Experience not found".to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Experience not found".to_string()));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM experiences")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)
    }
}

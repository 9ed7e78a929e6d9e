use async_trait::async_trait;
use chrono::Utc;

use crate::{
    entities::skill::{Skill, SkillForm},
    errors::AppError,
    repositories::sqlx_repo::SqlxSkillRepo,
};

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create(&self, form: &SkillForm) -> Result<i64, AppError>;
    async fn get(&self, id: i64) -> Result<Skill, AppError>;
    async fn list(&self) -> Result<Vec<Skill>, AppError>;
    async fn update(&self, id: i64, form: &SkillForm) -> Result<(), AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

impl SqlxSkillRepo {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        SqlxSkillRepo { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    async fn create(&self, form: &SkillForm) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO skills (name, category, proficiency, icon, order_index, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(&form.name)
        .bind(&form.category)
        .bind(form.proficiency)
        .bind(&form.icon)
        .bind(form.order_index)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(result.last_insert_rowid())
    }

    async fn get(&self, id: i64) -> Result<Skill, AppError> {
        sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound("Skill not found".to_string()))
    }

    async fn list(&self) -> Result<Vec<Skill>, AppError> {
        sqlx::query_as::<_, Skill>("SELECT * FROM skills ORDER BY order_index, id")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn update(&self, id: i64, form: &SkillForm) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE skills SET
                name = ?, category = ?, proficiency = ?, icon = ?, order_index = ?
            WHERE id = ?
            "#
        )
        .bind(&form.name)
        .bind(&form.category)
        .bind(form.proficiency)
        .bind(&form.icon)
        .bind(form.order_index)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Skill not found".to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Skill not found".to_string()));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM skills")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)
    }
}

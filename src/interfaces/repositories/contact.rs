use async_trait::async_trait;
use chrono::Utc;

use crate::{
    entities::contact::{ContactForm, ContactMessage},
    errors::AppError,
    repositories::sqlx_repo::SqlxContactRepo,
};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, form: &ContactForm) -> Result<i64, AppError>;
    async fn get(&self, id: i64) -> Result<ContactMessage, AppError>;
    async fn list(&self) -> Result<Vec<ContactMessage>, AppError>;
    async fn mark_read(&self, id: i64) -> Result<(), AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
    async fn count_unread(&self) -> Result<i64, AppError>;
}

impl SqlxContactRepo {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        SqlxContactRepo { pool }
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepo {
    async fn create(&self, form: &ContactForm) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO contact_messages (name, email, subject, message, is_read, created_at)
            VALUES (?, ?, ?, ?, FALSE, ?)
            "#
        )
        .bind(&form.name)
        .bind(&form.email)
        .bind(&form.subject)
        .bind(&form.message)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(result.last_insert_rowid())
    }

    async fn get(&self, id: i64) -> Result<ContactMessage, AppError> {
        sqlx::query_as::<_, ContactMessage>("SELECT * FROM contact_messages WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound("Message not found".to_string()))
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, AppError> {
        sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages ORDER BY created_at DESC, id DESC"
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn mark_read(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE contact_messages SET is_read = TRUE WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Message not found".to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Message not found".to_string()));
        }
        Ok(())
    }

    async fn count_unread(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM contact_messages WHERE is_read = FALSE"
        )
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }
}

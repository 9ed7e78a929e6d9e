use async_trait::async_trait;
use chrono::Utc;

use crate::{
    entities::certification::{Certification, CertificationForm},
    errors::AppError,
    repositories::sqlx_repo::SqlxCertificationRepo,
};

#[async_trait]
pub trait CertificationRepository: Send + Sync {
    async fn create(&self, form: &CertificationForm) -> Result<i64, AppError>;
    async fn get(&self, id: i64) -> Result<Certification, AppError>;
    async fn list(&self) -> Result<Vec<Certification>, AppError>;
    async fn update(&self, id: i64, form: &CertificationForm) -> Result<(), AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

impl SqlxCertificationRepo {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        SqlxCertificationRepo { pool }
    }
}

#[async_trait]
impl CertificationRepository for SqlxCertificationRepo {
    async fn create(&self, form: &CertificationForm) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO certifications (
                name, issuer, issue_date, expiry_date, credential_id,
                credential_url, image, order_index, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(&form.name)
        .bind(&form.issuer)
        .bind(&form.issue_date)
        .bind(&form.expiry_date)
        .bind(&form.credential_id)
        .bind(&form.credential_url)
        .bind(&form.image)
        .bind(form.order_index)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(result.last_insert_rowid())
    }

    async fn get(&self, id: i64) -> Result<Certification, AppError> {
        sqlx::query_as::<_, Certification>("SELECT * FROM certifications WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound("Certification not found".to_string()))
    }

    async fn list(&self) -> Result<Vec<Certification>, AppError> {
        sqlx::query_as::<_, Certification>(
            "SELECT * FROM certifications ORDER BY order_index, id"
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn update(&self, id: i64, form: &CertificationForm) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE certifications SET
                name = ?, issuer = ?, issue_date = ?, expiry_date = ?,
                credential_id = ?, credential_url = ?, image = ?, order_index = ?
            WHERE id = ?
            "#
        )
        .bind(&form.name)
        .bind(&form.issuer)
        .bind(&form.issue_date)
        .bind(&form.expiry_date)
        .bind(&form.credential_id)
        .bind(&form.credential_url)
        .bind(&form.image)
        .bind(form.order_index)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Certification not found".to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM certifications WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Certification not found".to_string()));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM certifications")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)
    }
}

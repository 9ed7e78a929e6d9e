use async_trait::async_trait;
use chrono::Utc;

use crate::{
    entities::profile::{Profile, ProfileForm},
    errors::AppError,
    repositories::sqlx_repo::SqlxProfileRepo,
};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Returns the singleton profile, if one has been created yet.
    async fn get(&self) -> Result<Option<Profile>, AppError>;

    /// Creates or replaces the singleton row in one atomic statement.
    async fn upsert(&self, form: &ProfileForm) -> Result<Profile, AppError>;
}

impl SqlxProfileRepo {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        SqlxProfileRepo { pool }
    }
}

#[async_trait]
impl ProfileRepository for SqlxProfileRepo {
    async fn get(&self) -> Result<Option<Profile>, AppError> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profile WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn upsert(&self, form: &ProfileForm) -> Result<Profile, AppError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profile (
                id, name, title, description, email, phone, location,
                profile_image, resume_url, github_url, linkedin_url, orcid_url,
                years_experience, projects_completed, companies_worked, updated_at
            )
            VALUES (1, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                title = excluded.title,
                description = excluded.description,
                email = excluded.email,
                phone = excluded.phone,
                location = excluded.location,
                profile_image = excluded.profile_image,
                resume_url = excluded.resume_url,
                github_url = excluded.github_url,
                linkedin_url = excluded.linkedin_url,
                orcid_url = excluded.orcid_url,
                years_experience = excluded.years_experience,
                projects_completed = excluded.projects_completed,
                companies_worked = excluded.companies_worked,
                updated_at = excluded.updated_at
            RETURNING *
            "#
        )
        .bind(&form.name)
        .bind(&form.title)
        .bind(&form.description)
        .bind(&form.email)
        .bind(&form.phone)
        .bind(&form.location)
        .bind(&form.profile_image)
        .bind(&form.resume_url)
        .bind(&form.github_url)
        .bind(&form.linkedin_url)
        .bind(&form.orcid_url)
        .bind(form.years_experience)
        .bind(form.projects_completed)
        .bind(form.companies_worked)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(profile)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The site owner's card. At most one row exists; the table enforces
/// `id = 1` so there is no "first row" ambiguity.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub profile_image: String,
    pub resume_url: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub orcid_url: String,
    pub years_experience: f64,
    pub projects_completed: i64,
    pub companies_worked: i64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProfileForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub profile_image: String,

    #[serde(default)]
    pub resume_url: String,

    #[serde(default)]
    pub github_url: String,

    #[serde(default)]
    pub linkedin_url: String,

    #[serde(default)]
    pub orcid_url: String,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "Years of experience cannot be negative"))]
    pub years_experience: f64,

    #[serde(default)]
    #[validate(range(min = 0, message = "Projects completed cannot be negative"))]
    pub projects_completed: i64,

    #[serde(default)]
    #[validate(range(min = 0, message = "Companies worked cannot be negative"))]
    pub companies_worked: i64,
}

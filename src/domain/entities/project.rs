use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::list_field;

/// Raw row; the three list columns hold stored JSON text.
#[derive(Debug, sqlx::FromRow)]
pub struct ProjectRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub detailed_description: String,
    pub technologies: String,
    pub features: String,
    pub images: String,
    pub project_url: String,
    pub github_url: String,
    pub is_featured: bool,
    pub order_index: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub detailed_description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub project_url: String,
    pub github_url: String,
    pub is_featured: bool,
    pub order_index: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            title: row.title,
            description: row.description,
            detailed_description: row.detailed_description,
            technologies: list_field::decode(&row.technologies),
            features: list_field::decode(&row.features),
            images: list_field::decode(&row.images),
            project_url: row.project_url,
            github_url: row.github_url,
            is_featured: row.is_featured,
            order_index: row.order_index,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProjectForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[serde(default)]
    pub detailed_description: String,

    #[serde(default)]
    pub technologies: Vec<String>,

    #[serde(default)]
    pub features: Vec<String>,

    /// Ordered mix of managed upload paths and external URLs.
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub project_url: String,

    #[serde(default)]
    pub github_url: String,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub order_index: i64,
}

impl ProjectForm {
    pub fn technologies_json(&self) -> String {
        list_field::encode(&self.technologies)
    }

    pub fn features_json(&self) -> String {
        list_field::encode(&self.features)
    }

    pub fn images_json(&self) -> String {
        list_field::encode(&self.images)
    }

    /// The submitted image list with blanks dropped, as it will persist.
    pub fn kept_images(&self) -> Vec<String> {
        list_field::decode(&self.images_json())
    }
}

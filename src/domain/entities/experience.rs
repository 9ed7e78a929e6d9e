use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::list_field;

/// Raw row; `responsibilities` is the stored JSON text.
#[derive(Debug, sqlx::FromRow)]
pub struct ExperienceRow {
    pub id: i64,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
    pub description: String,
    pub responsibilities: String,
    pub order_index: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct Experience {
    pub id: i64,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub order_index: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ExperienceRow> for Experience {
    fn from(row: ExperienceRow) -> Self {
        Experience {
            id: row.id,
            job_title: row.job_title,
            company: row.company,
            location: row.location,
            start_date: row.start_date,
            end_date: row.end_date,
            is_current: row.is_current,
            description: row.description,
            responsibilities: list_field::decode(&row.responsibilities),
            order_index: row.order_index,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ExperienceForm {
    #[validate(length(min = 1, message = "Job title is required"))]
    pub job_title: String,

    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,

    #[serde(default)]
    pub location: String,

    #[validate(length(min = 1, message = "Start date is required"))]
    pub start_date: String,

    #[serde(default)]
    pub end_date: String,

    #[serde(default)]
    pub is_current: bool,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub responsibilities: Vec<String>,

    #[serde(default)]
    pub order_index: i64,
}

impl ExperienceForm {
    pub fn responsibilities_json(&self) -> String {
        list_field::encode(&self.responsibilities)
    }
}

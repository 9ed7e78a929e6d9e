use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Certification {
    pub id: i64,
    pub name: String,
    pub issuer: String,
    pub issue_date: String,
    pub expiry_date: String,
    pub credential_id: String,
    pub credential_url: String,
    pub image: String,
    pub order_index: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CertificationForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Issuer is required"))]
    pub issuer: String,

    #[serde(default)]
    pub issue_date: String,

    #[serde(default)]
    pub expiry_date: String,

    #[serde(default)]
    pub credential_id: String,

    #[serde(default)]
    pub credential_url: String,

    /// Managed upload path or external badge URL; empty for none.
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub order_index: i64,
}

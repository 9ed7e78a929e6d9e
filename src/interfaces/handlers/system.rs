use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;

use crate::constants::START_TIME;
use crate::errors::AppError;
use crate::repositories::certification::CertificationRepository;
use crate::repositories::contact::ContactRepository;
use crate::repositories::experience::ExperienceRepository;
use crate::repositories::project::ProjectRepository;
use crate::repositories::skill::SkillRepository;
use crate::repositories::user::UserRepository;
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now = Utc::now();
    let database = match state.auth_handler.user_repo.check_connection().await {
        Ok(_) => "OK",
        Err(_) => "Unavailable",
    };

    HttpResponse::Ok().json(serde_json::json!({
        "status": if database == "OK" { "healthy" } else { "degraded" },
        "database": database,
        "uptime_seconds": now.signed_duration_since(*START_TIME).num_seconds(),
        "timestamp": now.to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[get("/dashboard")]
pub async fn admin_dashboard(
    admin: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let total_experiences = state.experience_repo.count().await?;
    let total_skills = state.skill_repo.count().await?;
    let total_projects = state.project_repo.count().await?;
    let total_certifications = state.certification_repo.count().await?;
    let unread_messages = state.contact_repo.count_unread().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Welcome, {}", admin.0.username),
        "totals": {
            "experiences": total_experiences,
            "skills": total_skills,
            "projects": total_projects,
            "certifications": total_certifications,
        },
        "unread_messages": unread_messages,
    })))
}

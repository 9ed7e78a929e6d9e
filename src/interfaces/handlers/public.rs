use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Serialize;
use validator::Validate;

use crate::entities::certification::Certification;
use crate::entities::contact::ContactForm;
use crate::entities::experience::Experience;
use crate::entities::profile::Profile;
use crate::entities::project::Project;
use crate::entities::skill::{group_by_category, SkillGroup};
use crate::errors::AppError;
use crate::repositories::certification::CertificationRepository;
use crate::repositories::contact::ContactRepository;
use crate::repositories::experience::ExperienceRepository;
use crate::repositories::profile::ProfileRepository;
use crate::repositories::project::ProjectRepository;
use crate::repositories::skill::SkillRepository;
use crate::AppState;

/// Everything the landing page needs in one response.
#[derive(Serialize)]
pub struct LandingPage {
    pub profile: Option<Profile>,
    pub experiences: Vec<Experience>,
    pub skills_by_category: Vec<SkillGroup>,
    pub featured_projects: Vec<Project>,
    pub certifications: Vec<Certification>,
}

#[get("/")]
pub async fn landing(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let profile = state.profile_repo.get().await?;
    let experiences = state.experience_repo.list().await?
        .into_iter()
        .map(Experience::from)
        .collect();
    let skills = state.skill_repo.list().await?;
    let featured_projects = state.project_repo.list_featured().await?
        .into_iter()
        .map(Project::from)
        .collect();
    let certifications = state.certification_repo.list().await?;

    Ok(HttpResponse::Ok().json(LandingPage {
        profile,
        experiences,
        skills_by_category: group_by_category(skills),
        featured_projects,
        certifications,
    }))
}

#[get("/api/project/{id}")]
pub async fn get_project(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let project = state.project_repo.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Project::from(project)))
}

#[post("/contact")]
pub async fn submit_contact(
    state: web::Data<AppState>,
    form: web::Json<ContactForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return AppError::from(e).to_http_response();
    }

    match state.contact_repo.create(&form).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Message sent successfully!"
        })),
        Err(e) => {
            // Never leaks storage details to an anonymous caller.
            tracing::error!("Failed to store contact message: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": "Failed to send message. Please try again."
            }))
        }
    }
}

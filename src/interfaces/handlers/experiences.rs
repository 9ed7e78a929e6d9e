use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

use crate::entities::experience::{Experience, ExperienceForm};
use crate::errors::AppError;
use crate::repositories::experience::ExperienceRepository;
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

#[get("/experiences")]
pub async fn list_experiences(
    _admin: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let experiences: Vec<Experience> = state.experience_repo.list().await?
        .into_iter()
        .map(Experience::from)
        .collect();
    Ok(HttpResponse::Ok().json(experiences))
}

#[post("/experiences")]
pub async fn create_experience(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    form: web::Json<ExperienceForm>,
) -> Result<impl Responder, AppError> {
    form.validate().map_err(AppError::from)?;

    let id = state.experience_repo.create(&form).await?;
    Ok(HttpResponse::Created().json(serde_json::json!({
        "id": id,
        "message": "Experience added successfully"
    })))
}

#[get("/experiences/{id}")]
pub async fn get_experience(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let experience = state.experience_repo.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Experience::from(experience)))
}

#[put("/experiences/{id}")]
pub async fn update_experience(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
    form: web::Json<ExperienceForm>,
) -> Result<impl Responder, AppError> {
    form.validate().map_err(AppError::from)?;

    state.experience_repo.update(id.into_inner(), &form).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Experience updated successfully"
    })))
}

#[delete("/experiences/{id}")]
pub async fn delete_experience(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    state.experience_repo.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Experience deleted successfully"
    })))
}

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

use crate::entities::skill::SkillForm;
use crate::errors::AppError;
use crate::repositories::skill::SkillRepository;
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

#[get("/skills")]
pub async fn list_skills(
    _admin: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let skills = state.skill_repo.list().await?;
    Ok(HttpResponse::Ok().json(skills))
}

#[post("/skills")]
pub async fn create_skill(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    form: web::Json<SkillForm>,
) -> Result<impl Responder, AppError> {
    form.validate().map_err(AppError::from)?;

    let id = state.skill_repo.create(&form).await?;
    Ok(HttpResponse::Created().json(serde_json::json!({
        "id": id,
        "message": "Skill added successfully"
    })))
}

#[get("/skills/{id}")]
pub async fn get_skill(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let skill = state.skill_repo.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(skill))
}

#[put("/skills/{id}")]
pub async fn update_skill(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
    form: web::Json<SkillForm>,
) -> Result<impl Responder, AppError> {
    form.validate().map_err(AppError::from)?;

    state.skill_repo.update(id.into_inner(), &form).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Skill updated successfully"
    })))
}

#[delete("/skills/{id}")]
pub async fn delete_skill(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    state.skill_repo.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Skill deleted successfully"
    })))
}

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

use crate::entities::certification::CertificationForm;
use crate::errors::AppError;
use crate::media::MediaStore;
use crate::repositories::certification::CertificationRepository;
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

#[get("/certifications")]
pub async fn list_certifications(
    _admin: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let certifications = state.certification_repo.list().await?;
    Ok(HttpResponse::Ok().json(certifications))
}

#[post("/certifications")]
pub async fn create_certification(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    form: web::Json<CertificationForm>,
) -> Result<impl Responder, AppError> {
    form.validate().map_err(AppError::from)?;

    let id = state.certification_repo.create(&form).await?;
    Ok(HttpResponse::Created().json(serde_json::json!({
        "id": id,
        "message": "Certification added successfully"
    })))
}

#[get("/certifications/{id}")]
pub async fn get_certification(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let certification = state.certification_repo.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(certification))
}

/// Replacing the image drops the previously stored file once the row
/// commits; external badge URLs are left alone.
#[put("/certifications/{id}")]
pub async fn update_certification(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
    form: web::Json<CertificationForm>,
) -> Result<impl Responder, AppError> {
    form.validate().map_err(AppError::from)?;

    let id = id.into_inner();
    let existing = state.certification_repo.get(id).await?;

    state.certification_repo.update(id, &form).await?;

    if existing.image != form.image && MediaStore::is_managed(&existing.image) {
        delete_file(&state, existing.image).await;
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Certification updated successfully"
    })))
}

#[delete("/certifications/{id}")]
pub async fn delete_certification(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let id = id.into_inner();
    let existing = state.certification_repo.get(id).await?;

    state.certification_repo.delete(id).await?;

    if MediaStore::is_managed(&existing.image) {
        delete_file(&state, existing.image).await;
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Certification deleted successfully"
    })))
}

async fn delete_file(state: &web::Data<AppState>, path: String) {
    let media = state.media.clone();
    let result = web::block(move || media.delete_image(&path)).await;
    if let Err(e) = result {
        tracing::error!("Image cleanup task failed: {}", e);
    }
}

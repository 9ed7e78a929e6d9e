use actix_web::{get, put, web, HttpResponse, Responder};
use validator::Validate;

use crate::entities::profile::ProfileForm;
use crate::errors::AppError;
use crate::repositories::profile::ProfileRepository;
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

#[get("/profile")]
pub async fn get_profile(
    _admin: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let profile = state.profile_repo.get().await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[put("/profile")]
pub async fn update_profile(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    form: web::Json<ProfileForm>,
) -> Result<impl Responder, AppError> {
    form.validate().map_err(AppError::from)?;

    let profile = state.profile_repo.upsert(&form).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Profile updated successfully",
        "profile": profile
    })))
}

use actix_web::{delete, get, post, web, HttpResponse, Responder};

use crate::errors::AppError;
use crate::repositories::contact::ContactRepository;
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

#[get("/messages")]
pub async fn list_messages(
    _admin: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let messages = state.contact_repo.list().await?;
    Ok(HttpResponse::Ok().json(messages))
}

#[post("/messages/{id}/read")]
pub async fn mark_message_read(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    state.contact_repo.mark_read(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Message marked as read"
    })))
}

#[delete("/messages/{id}")]
pub async fn delete_message(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    state.contact_repo.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Message deleted successfully"
    })))
}

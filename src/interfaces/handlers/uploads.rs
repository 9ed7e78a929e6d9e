use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use actix_web::{delete, http::StatusCode, post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::handlers::json_error::json_error;
use crate::media::{ImageCategory, UploadError};
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

#[derive(Debug, MultipartForm)]
pub struct ImageUploadForm {
    #[multipart(limit = "16MiB")]
    pub file: TempFile,
    pub category: Text<String>,
}

#[post("/images")]
pub async fn upload_image(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<ImageUploadForm>,
) -> impl Responder {
    let Some(category) = ImageCategory::parse(&form.category) else {
        return json_error(
            StatusCode::BAD_REQUEST,
            "Invalid category",
            "Expected one of: profile, projects, certifications",
        );
    };

    let Some(file_name) = form.file.file_name.clone() else {
        return json_error(
            StatusCode::BAD_REQUEST,
            "Missing filename",
            "The uploaded file must carry its original filename",
        );
    };

    let media = state.media.clone();
    let temp_path = form.file.file.path().to_path_buf();

    let result = web::block(move || {
        let bytes = std::fs::read(&temp_path).map_err(UploadError::Io)?;
        media.store_image(&bytes, &file_name, category)
    })
    .await;

    match result {
        Ok(Ok(stored)) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "path": stored.path,
            "thumbnail": stored.thumbnail,
        })),
        Ok(Err(UploadError::Io(e))) => {
            tracing::error!("Failed to store upload: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Failed to store file"
            }))
        }
        Ok(Err(rejected)) => HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": rejected.to_string()
        })),
        Err(e) => {
            tracing::error!("Upload task failed: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Upload processing failed"
            }))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteImageRequest {
    pub path: String,
}

/// Best-effort by contract: a path that no longer resolves to files is
/// still a success.
#[delete("/images")]
pub async fn delete_image(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    body: web::Json<DeleteImageRequest>,
) -> impl Responder {
    let media = state.media.clone();
    let path = body.into_inner().path;

    if let Err(e) = web::block(move || media.delete_image(&path)).await {
        tracing::error!("Image cleanup task failed: {}", e);
    }

    HttpResponse::Ok().json(serde_json::json!({ "success": true }))
}

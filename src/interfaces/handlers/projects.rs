use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

use crate::domain::list_field;
use crate::entities::project::{Project, ProjectForm};
use crate::errors::AppError;
use crate::media::MediaStore;
use crate::repositories::project::ProjectRepository;
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

#[get("/projects")]
pub async fn list_projects(
    _admin: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let projects: Vec<Project> = state.project_repo.list().await?
        .into_iter()
        .map(Project::from)
        .collect();
    Ok(HttpResponse::Ok().json(projects))
}

#[post("/projects")]
pub async fn create_project(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    form: web::Json<ProjectForm>,
) -> Result<impl Responder, AppError> {
    form.validate().map_err(AppError::from)?;

    let id = state.project_repo.create(&form).await?;
    Ok(HttpResponse::Created().json(serde_json::json!({
        "id": id,
        "message": "Project added successfully"
    })))
}

#[get("/projects/{id}")]
pub async fn get_project(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let project = state.project_repo.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Project::from(project)))
}

/// Reconciles the submitted image list against what the project owned:
/// entries may be kept stored paths, freshly uploaded stored paths, or
/// external URLs, in any order. Managed images that the submission no
/// longer mentions are removed from disk after the row commits.
#[put("/projects/{id}")]
pub async fn update_project(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
    form: web::Json<ProjectForm>,
) -> Result<impl Responder, AppError> {
    form.validate().map_err(AppError::from)?;

    let id = id.into_inner();
    let existing = state.project_repo.get(id).await?;

    let kept = form.kept_images();
    let dropped: Vec<String> = list_field::decode(&existing.images)
        .into_iter()
        .filter(|path| MediaStore::is_managed(path) && !kept.contains(path))
        .collect();

    state.project_repo.update(id, &form).await?;

    delete_files(&state, dropped).await;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Project updated successfully"
    })))
}

#[delete("/projects/{id}")]
pub async fn delete_project(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let id = id.into_inner();
    let existing = state.project_repo.get(id).await?;

    let owned: Vec<String> = list_field::decode(&existing.images)
        .into_iter()
        .filter(|path| MediaStore::is_managed(path))
        .collect();

    state.project_repo.delete(id).await?;

    delete_files(&state, owned).await;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Project deleted successfully"
    })))
}

async fn delete_files(state: &web::Data<AppState>, paths: Vec<String>) {
    if paths.is_empty() {
        return;
    }
    let media = state.media.clone();
    let result = web::block(move || {
        for path in &paths {
            media.delete_image(path);
        }
    })
    .await;

    if let Err(e) = result {
        tracing::error!("Image cleanup task failed: {}", e);
    }
}

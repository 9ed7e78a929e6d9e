use actix_web::{post, web, HttpResponse, Responder, ResponseError};

use crate::entities::token::{LogoutRequest, RefreshTokenRequest};
use crate::entities::user::LoginRequest;
use crate::AppState;

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    credentials: web::Json<LoginRequest>
) -> impl Responder {
    match state.auth_handler.login(credentials.into_inner()).await {
        Ok(auth_response) => HttpResponse::Ok().json(auth_response),
        Err(e) => e.error_response(),
    }
}

#[post("/refresh")]
pub async fn refresh_token(
    state: web::Data<AppState>,
    request: web::Json<RefreshTokenRequest>,
) -> impl Responder {
    match state.auth_handler.refresh_token(&request.refresh_token).await {
        Ok(auth_response) => HttpResponse::Ok().json(auth_response),
        Err(e) => e.error_response(),
    }
}

/// There is no server-side token store, so logout validates the refresh
/// token and tells the client to discard its pair.
#[post("/logout")]
pub async fn logout(
    state: web::Data<AppState>,
    body: web::Json<LogoutRequest>
) -> impl Responder {
    match state.auth_handler.token_service.decode_refresh_jwt(&body.refresh_token) {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Logged out successfully"
        })),
        Err(e) => e.error_response(),
    }
}

use std::time::SystemTime;

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::mint_access_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Handle login: verify credentials against the user directory and
/// return a signed access token. This is the sole producer of tokens.
async fn login(
    req: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if req.email.trim().is_empty() {
        return Err(AppError::bad_request(
            "INVALID_EMAIL",
            "Email cannot be empty".to_string(),
        ));
    }

    let user = app_state
        .users
        .verify_credentials(&req.email, &req.password)
        .await?
        .ok_or_else(AppError::unauthorized)?;

    let token = mint_access_token(
        &user.email,
        user.role,
        user.id,
        SystemTime::now(),
        &app_state.security,
    )?;

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/auth/login").route(web::post().to(login)));
}

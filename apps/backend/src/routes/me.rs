use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::auth::role::Role;
use crate::error::AppError;
use crate::extractors::principal::Principal;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub sub: String,
    pub role: Role,
    pub authority: String,
}

/// Return the authenticated caller's identity. Anonymous callers get the
/// blanket 401 from the `Principal` extractor.
async fn me(principal: Principal) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(MeResponse {
        sub: principal.sub().to_string(),
        role: principal.role(),
        authority: principal.authority(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/me").route(web::get().to(me)));
}

use actix_web::web;

pub mod auth;
pub mod me;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(crate::health::configure)
        .configure(auth::configure_routes)
        .configure(me::configure_routes);
}

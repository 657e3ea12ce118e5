use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use backend::config::Config;
use backend::middleware::bearer_auth::BearerAuth;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::routes;
use backend::services::users::InMemoryUserDirectory;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use backend::telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let security = SecurityConfig::with_token_ttl(config.jwt_secret.as_bytes(), config.token_ttl);

    // Until a real user store is wired in, the directory is seeded from
    // DEV_USERS (email:password:id:ROLE, comma-separated).
    let users = match std::env::var("DEV_USERS") {
        Ok(spec) => match InMemoryUserDirectory::from_seed_spec(&spec) {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("❌ Invalid DEV_USERS: {e}");
                std::process::exit(1);
            }
        },
        Err(_) => InMemoryUserDirectory::new(),
    };

    let app_state = AppState::new(Arc::new(users), security);
    let data = web::Data::new(app_state);

    println!("🚀 Starting vetportal backend on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(BearerAuth)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

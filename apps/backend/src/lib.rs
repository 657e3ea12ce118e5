#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod health;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod trace_ctx;

// Re-exports for public API
pub use auth::claims::Claims;
pub use auth::error::TokenError;
pub use auth::jwt::{decode_claims, is_valid, mint_access_token};
pub use auth::principal::{AuthOutcome, AuthenticatedPrincipal};
pub use auth::role::Role;
pub use config::Config;
pub use error::AppError;
pub use extractors::principal::Principal;
pub use middleware::bearer_auth::BearerAuth;
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use services::users::{InMemoryUserDirectory, UserDirectory, UserRecord};
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

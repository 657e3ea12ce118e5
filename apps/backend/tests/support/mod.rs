//! Shared helpers for integration tests.
// Not every test binary uses every helper.
#![allow(dead_code)]

pub mod app_builder;
pub mod auth;
pub mod logging;
pub mod test_middleware;

use std::sync::Arc;

use backend::services::users::InMemoryUserDirectory;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;

/// Secret used by every test unless a test needs a mismatched key.
pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

/// App state with the test secret and a directory seeded with the
/// standard test users.
pub fn test_state() -> AppState {
    test_state_with_security(SecurityConfig::new(TEST_SECRET))
}

pub fn test_state_with_security(security: SecurityConfig) -> AppState {
    let users = InMemoryUserDirectory::new();
    users.insert("alice@example.com", "hunter2", 42, backend::Role::Owner);
    users.insert("vet@example.com", "stetho", 7, backend::Role::Vet);
    AppState::new(Arc::new(users), security)
}

#[ctor::ctor]
fn init_test_logging() {
    logging::init();
}

use std::sync::Arc;

use crate::services::users::UserDirectory;

use super::security_config::SecurityConfig;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Security configuration including the token signing key
    pub security: SecurityConfig,
    /// User directory consulted by the login flow
    pub users: Arc<dyn UserDirectory>,
}

impl AppState {
    /// Create a new AppState with the given user directory and security config.
    pub fn new(users: Arc<dyn UserDirectory>, security: SecurityConfig) -> Self {
        Self { security, users }
    }
}

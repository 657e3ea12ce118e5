//! User directory: the persistence collaborator behind the login flow.
//!
//! The auth core is stateless; the only thing it needs from storage is
//! "does this email/password pair name a user, and what are their role
//! and id". Real deployments put a database behind this trait. The
//! in-memory implementation serves local development and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::auth::role::Role;
use crate::error::AppError;

/// A user as the login flow needs it: exactly the triple that goes into
/// a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Durable storage identifier
    pub id: i64,
    /// Login identifier (email), used as the token subject
    pub email: String,
    pub role: Role,
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Verify credentials; `Ok(None)` means "no such user or wrong
    /// password" (the two are indistinguishable to the caller).
    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, AppError>;
}

/// In-memory directory keyed by email. Passwords are stored as given;
/// hashing policy lives with the real persistence layer, not here.
#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<String, (String, UserRecord)>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a seed list of the form
    /// `email:password:id:ROLE,email:password:id:ROLE`, as accepted from
    /// the `DEV_USERS` environment variable. Intended for local
    /// development only.
    pub fn from_seed_spec(spec: &str) -> Result<Self, AppError> {
        let dir = Self::new();
        for entry in spec.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let parts: Vec<&str> = entry.split(':').collect();
            let [email, password, id, role] = parts[..] else {
                return Err(AppError::config(format!(
                    "invalid DEV_USERS entry '{entry}': expected email:password:id:ROLE"
                )));
            };
            let id = id.parse::<i64>().map_err(|_| {
                AppError::config(format!("invalid DEV_USERS id '{id}' in '{entry}'"))
            })?;
            let role = serde_json::from_value::<Role>(serde_json::Value::String(role.to_string()))
                .map_err(|_| {
                    AppError::config(format!("invalid DEV_USERS role '{role}' in '{entry}'"))
                })?;
            dir.insert(email, password, id, role);
        }
        Ok(dir)
    }

    /// Add or replace a user. Lookup is by exact email, case-sensitive.
    pub fn insert(&self, email: &str, password: &str, id: i64, role: Role) {
        let record = UserRecord {
            id,
            email: email.to_string(),
            role,
        };
        self.users
            .write()
            .insert(email.to_string(), (password.to_string(), record));
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, AppError> {
        let users = self.users.read();
        Ok(users
            .get(email)
            .filter(|(stored, _)| stored == password)
            .map(|(_, record)| record.clone()))
    }
}

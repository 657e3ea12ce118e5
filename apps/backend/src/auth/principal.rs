//! Request-scoped authenticated identity.

use serde::{Deserialize, Serialize};

use crate::auth::claims::Claims;
use crate::auth::role::Role;

/// The identity and role established for the duration of one request.
///
/// Inserted into request extensions by the authentication middleware at
/// most once per request and read-only afterwards. Dropped with the
/// request; nothing about it is persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuthenticatedPrincipal {
    /// Subject identity (login identifier)
    pub sub: String,
    /// Role embedded in the verified token
    pub role: Role,
}

impl AuthenticatedPrincipal {
    /// Granted authority string, e.g. `ROLE_OWNER`.
    pub fn authority(&self) -> String {
        self.role.authority()
    }
}

impl From<Claims> for AuthenticatedPrincipal {
    fn from(claims: Claims) -> Self {
        Self {
            sub: claims.sub,
            role: claims.role,
        }
    }
}

/// Result of one authentication pass over an inbound request.
///
/// `Anonymous` covers both "no credential presented" and "credential
/// rejected": the middleware never blocks on its own, so the distinction
/// is visible only in logs. Blocking belongs to the authorization seam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// No usable credential; the request proceeds unauthenticated.
    Anonymous,
    /// A verified token established this principal.
    Authenticated(AuthenticatedPrincipal),
}

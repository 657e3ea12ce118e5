//! JWT claims carried by vetportal access tokens.

use serde::{Deserialize, Serialize};

use crate::auth::role::Role;

/// Claims embedded in every access token minted by this backend.
///
/// The decoded form is what the authentication middleware turns into an
/// [`AuthenticatedPrincipal`](crate::auth::principal::AuthenticatedPrincipal).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject identity: the user's login identifier (email)
    pub sub: String,
    /// The user's role within the portal
    pub role: Role,
    /// Durable storage identifier (users.id)
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch); always strictly greater than `iat`
    pub exp: i64,
}

//! The closed set of portal roles.
//!
//! Add new roles here; never pass ad-hoc strings as roles. Each variant
//! maps 1:1 to the SCREAMING_SNAKE_CASE string embedded in tokens.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Marker prepended to a role name to form its granted authority.
pub const AUTHORITY_PREFIX: &str = "ROLE_";

/// A user's role within the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Pet owner
    Owner,
    /// Veterinarian
    Vet,
    /// Supply vendor
    Vendor,
}

impl Role {
    /// Canonical string form, as it appears in the token's `role` claim.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "OWNER",
            Role::Vet => "VET",
            Role::Vendor => "VENDOR",
        }
    }

    /// Granted authority derived from this role, e.g. `ROLE_OWNER`.
    pub fn authority(&self) -> String {
        format!("{AUTHORITY_PREFIX}{}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

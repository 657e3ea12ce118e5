//! Token verification failure taxonomy.
//!
//! These never reach a client as an HTTP error: the authentication
//! middleware absorbs every kind, logs it, and treats the request as
//! anonymous. The authorization seam ([`Principal`]) produces the
//! user-visible rejection.
//!
//! [`Principal`]: crate::extractors::principal::Principal

use thiserror::Error;

/// Why a presented token could not be accepted.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Structurally invalid token (not three segments, bad encoding,
    /// unknown role, missing claims).
    #[error("malformed token")]
    Malformed,
    /// Signature does not verify under the configured key.
    #[error("invalid token signature")]
    SignatureInvalid,
    /// The `exp` claim is in the past.
    #[error("token expired")]
    Expired,
    /// Decoded subject does not match the identity being confirmed.
    #[error("token subject mismatch")]
    SubjectMismatch,
}

impl TokenError {
    /// Short machine-readable tag used in diagnostic log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            TokenError::Malformed => "malformed",
            TokenError::SignatureInvalid => "invalid_signature",
            TokenError::Expired => "expired",
            TokenError::SubjectMismatch => "subject_mismatch",
        }
    }
}

//! Signing-key configuration for access tokens.

use core::fmt;
use std::time::Duration;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation};

/// Immutable token-signing configuration.
///
/// Both keys are derived exactly once, at construction, from the raw
/// bytes of the configured secret, then shared by every encode/decode
/// for the lifetime of the process. There is no rotation: a minted token
/// stays verifiable until its natural expiry.
#[derive(Clone)]
pub struct SecurityConfig {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    token_ttl: Duration,
}

impl SecurityConfig {
    /// Default access-token lifetime (24 hours).
    pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

    /// Create a config with the given secret and the default lifetime.
    pub fn new(jwt_secret: impl AsRef<[u8]>) -> Self {
        Self::with_token_ttl(jwt_secret, Self::DEFAULT_TOKEN_TTL)
    }

    /// Create a config with the given secret and token lifetime.
    pub fn with_token_ttl(jwt_secret: impl AsRef<[u8]>, token_ttl: Duration) -> Self {
        let secret = jwt_secret.as_ref();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            token_ttl,
        }
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Validation pinned to the configured algorithm, `exp` checked with
    /// zero leeway so expiry is exact.
    pub fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation
    }
}

// Key material stays out of logs.
impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("algorithm", &self.algorithm)
            .field("token_ttl", &self.token_ttl)
            .finish_non_exhaustive()
    }
}

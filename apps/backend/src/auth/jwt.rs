//! Token codec: encode and verify signed access tokens.
//!
//! Every decode path goes through [`decode_claims`], which pins the
//! configured algorithm, verifies the signature, and validates `exp`
//! with zero leeway.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, Header};

use crate::auth::claims::Claims;
use crate::auth::error::TokenError;
use crate::auth::role::Role;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Mint a signed access token for `(sub, role, user_id)`.
///
/// `iat` is taken from `now`; `exp` is `iat` plus the configured token
/// lifetime. Callers cannot adjust either timestamp directly.
pub fn mint_access_token(
    sub: &str,
    role: Role,
    user_id: i64,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    if sub.trim().is_empty() {
        return Err(AppError::invalid(
            "INVALID_SUBJECT",
            "Subject identity cannot be empty".to_string(),
        ));
    }

    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
        .as_secs() as i64;
    let exp = iat + security.token_ttl().as_secs() as i64;

    let claims = Claims {
        sub: sub.to_string(),
        role,
        user_id,
        iat,
        exp,
    };

    encode(
        &Header::new(security.algorithm()),
        &claims,
        security.encoding_key(),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify a token and return its claims.
///
/// Single parse/verify path shared by all claim accessors and by the
/// authentication middleware.
pub fn decode_claims(token: &str, security: &SecurityConfig) -> Result<Claims, TokenError> {
    decode::<Claims>(token, security.decoding_key(), &security.validation())
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
            _ => TokenError::Malformed,
        })
}

/// Verify a token and return its subject identity claim.
pub fn decode_subject(token: &str, security: &SecurityConfig) -> Result<String, TokenError> {
    decode_claims(token, security).map(|c| c.sub)
}

/// Verify a token and return its role claim.
pub fn decode_role(token: &str, security: &SecurityConfig) -> Result<Role, TokenError> {
    decode_claims(token, security).map(|c| c.role)
}

/// Verify a token and return its storage identifier claim.
pub fn decode_user_id(token: &str, security: &SecurityConfig) -> Result<i64, TokenError> {
    decode_claims(token, security).map(|c| c.user_id)
}

/// Confirm that a token verifies, is unexpired, and was issued for
/// `expected_sub`.
///
/// The subject comparison is exact and case-sensitive. Identity casing
/// is inconsistent elsewhere in the portal; this comparison deliberately
/// does not normalize. See DESIGN.md before changing it.
pub fn check_subject(
    token: &str,
    expected_sub: &str,
    security: &SecurityConfig,
) -> Result<(), TokenError> {
    let claims = decode_claims(token, security)?;
    if claims.sub == expected_sub {
        Ok(())
    } else {
        Err(TokenError::SubjectMismatch)
    }
}

/// Boolean form of [`check_subject`]. Never panics; any verification
/// failure reports `false`.
pub fn is_valid(token: &str, expected_sub: &str, security: &SecurityConfig) -> bool {
    check_subject(token, expected_sub, security).is_ok()
}

/// Whether the token's `exp` claim has passed.
///
/// A token that cannot be parsed or verified at all is also reported as
/// unusable (`true`).
pub fn is_expired(token: &str, security: &SecurityConfig) -> bool {
    let mut validation = security.validation();
    validation.validate_exp = false;

    let claims = match decode::<Claims>(token, security.decoding_key(), &validation) {
        Ok(data) => data.claims,
        Err(_) => return true,
    };

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(i64::MAX);

    claims.exp <= now
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::{decode_claims, is_expired, is_valid, mint_access_token};
    use crate::auth::error::TokenError;
    use crate::auth::role::Role;
    use crate::state::security_config::SecurityConfig;

    fn test_security() -> SecurityConfig {
        SecurityConfig::new("test_secret_key_for_testing_purposes_only")
    }

    #[test]
    fn test_mint_and_decode_roundtrip() {
        let security = test_security();
        let now = SystemTime::now();

        let token = mint_access_token("alice@example.com", Role::Owner, 42, now, &security)
            .expect("mint should succeed");
        let claims = decode_claims(&token, &security).expect("decode should succeed");

        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.role, Role::Owner);
        assert_eq!(claims.user_id, 42);
        assert_eq!(
            claims.iat,
            now.duration_since(UNIX_EPOCH).unwrap().as_secs() as i64
        );
        assert_eq!(
            claims.exp,
            claims.iat + security.token_ttl().as_secs() as i64
        );
    }

    #[test]
    fn test_empty_subject_rejected() {
        let security = test_security();
        let result = mint_access_token("  ", Role::Vet, 1, SystemTime::now(), &security);
        assert!(result.is_err());
    }

    #[test]
    fn test_expired_token() {
        // 1s lifetime, minted two minutes ago; leeway is zero so this is
        // firmly past expiry.
        let security =
            SecurityConfig::with_token_ttl("test_secret_key_for_testing_purposes_only", Duration::from_secs(1));
        let past = SystemTime::now() - Duration::from_secs(120);

        let token = mint_access_token("bob@example.com", Role::Vet, 7, past, &security)
            .expect("mint should succeed");

        assert_eq!(
            decode_claims(&token, &security),
            Err(TokenError::Expired)
        );
        assert!(is_expired(&token, &security));
        assert!(!is_valid(&token, "bob@example.com", &security));
    }

    #[test]
    fn test_bad_signature() {
        let security_a = SecurityConfig::new("secret-A-secret-A-secret-A-secret-A");
        let security_b = SecurityConfig::new("secret-B-secret-B-secret-B-secret-B");

        let token = mint_access_token("carol@example.com", Role::Vendor, 3, SystemTime::now(), &security_a)
            .expect("mint should succeed");

        assert_eq!(
            decode_claims(&token, &security_b),
            Err(TokenError::SignatureInvalid)
        );
    }

    #[test]
    fn test_subject_match_is_case_sensitive() {
        let security = test_security();
        let token = mint_access_token("Alice@Example.com", Role::Owner, 42, SystemTime::now(), &security)
            .expect("mint should succeed");

        assert!(is_valid(&token, "Alice@Example.com", &security));
        assert!(!is_valid(&token, "alice@example.com", &security));
    }

    #[test]
    fn test_garbage_token_is_malformed_not_panic() {
        let security = test_security();
        assert_eq!(
            decode_claims("not-a-token", &security),
            Err(TokenError::Malformed)
        );
        assert!(!is_valid("not-a-token", "anyone", &security));
        assert!(is_expired("not-a-token", &security));
    }
}

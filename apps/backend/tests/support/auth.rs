//! Token minting helpers for tests.

use std::time::{Duration, SystemTime};

use backend::auth::jwt::mint_access_token;
use backend::auth::role::Role;
use backend::state::security_config::SecurityConfig;

/// Mint a token for the given subject, role, and id.
pub fn mint_test_token(sub: &str, role: Role, user_id: i64, sec: &SecurityConfig) -> String {
    mint_access_token(sub, role, user_id, SystemTime::now(), sec)
        .expect("should mint token successfully")
}

/// Full Authorization header value including the "Bearer " prefix.
pub fn bearer_header(sub: &str, role: Role, user_id: i64, sec: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(sub, role, user_id, sec))
}

/// Mint a token whose lifetime has already elapsed.
pub fn mint_expired_token(sub: &str, role: Role, user_id: i64, sec: &SecurityConfig) -> String {
    let past = SystemTime::now()
        .checked_sub(Duration::from_secs(2 * sec.token_ttl().as_secs().max(3600)))
        .unwrap();
    mint_access_token(sub, role, user_id, past, sec).expect("should mint expired token")
}

//! Authorization seam: handler-side access to the installed principal.
//!
//! The bearer middleware never blocks a request; this extractor is where
//! "authentication required" is actually enforced. A route that takes
//! [`Principal`] rejects anonymous callers with a blanket 401 — the same
//! response whether no credential or a bad credential was presented.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::principal::AuthenticatedPrincipal;
use crate::auth::role::Role;
use crate::error::AppError;

/// The authenticated principal for the current request.
#[derive(Debug, Clone)]
pub struct Principal(pub AuthenticatedPrincipal);

impl Principal {
    pub fn sub(&self) -> &str {
        &self.0.sub
    }

    pub fn role(&self) -> Role {
        self.0.role
    }

    pub fn authority(&self) -> String {
        self.0.authority()
    }

    /// Enforce a role requirement; mismatch is a 403.
    pub fn require_role(&self, role: Role) -> Result<(), AppError> {
        if self.0.role == role {
            Ok(())
        } else {
            Err(AppError::forbidden())
        }
    }
}

impl FromRequest for Principal {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let principal = req
            .extensions()
            .get::<AuthenticatedPrincipal>()
            .cloned()
            .map(Principal)
            .ok_or_else(AppError::unauthorized);

        std::future::ready(principal)
    }
}

#[cfg(test)]
mod tests {
    use super::Principal;
    use crate::auth::principal::AuthenticatedPrincipal;
    use crate::auth::role::Role;

    fn owner_principal() -> Principal {
        Principal(AuthenticatedPrincipal {
            sub: "alice@example.com".to_string(),
            role: Role::Owner,
        })
    }

    #[test]
    fn test_require_role_matches() {
        assert!(owner_principal().require_role(Role::Owner).is_ok());
    }

    #[test]
    fn test_require_role_mismatch_is_forbidden() {
        let err = owner_principal().require_role(Role::Vet).unwrap_err();
        assert_eq!(err.status().as_u16(), 403);
    }

    #[test]
    fn test_authority() {
        assert_eq!(owner_principal().authority(), "ROLE_OWNER");
    }
}

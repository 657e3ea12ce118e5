//! Bearer authentication middleware.
//!
//! Runs once per inbound request: extracts the bearer credential from
//! the `Authorization` header, verifies it, and installs an
//! [`AuthenticatedPrincipal`] into request extensions. It is permissive:
//! a missing or rejected credential degrades the request to anonymous
//! and is forwarded unchanged. Rejection of anonymous requests to
//! protected routes happens downstream, at the [`Principal`] extractor.
//!
//! [`Principal`]: crate::extractors::principal::Principal

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::{debug, warn};

use crate::auth::jwt;
use crate::auth::principal::{AuthOutcome, AuthenticatedPrincipal};
use crate::state::app_state::AppState;

pub struct BearerAuth;

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware { service }))
    }
}

pub struct BearerAuthMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let AuthOutcome::Authenticated(principal) = authenticate(&req) {
            // Set-once: if an earlier filter already installed a
            // principal, it wins.
            let mut extensions = req.extensions_mut();
            if extensions.get::<AuthenticatedPrincipal>().is_none() {
                extensions.insert(principal);
            } else {
                debug!("principal already installed for this request; not overwriting");
            }
        }

        // Every path forwards, exactly once. This middleware never
        // terminates a request.
        Box::pin(self.service.call(req))
    }
}

/// One authentication pass. Pure apart from reading the clock; all
/// failure modes collapse to `Anonymous`.
fn authenticate(req: &ServiceRequest) -> AuthOutcome {
    let token = match extract_bearer_from_header(req.headers().get(header::AUTHORIZATION)) {
        // No credential is the normal shape of an anonymous request.
        None => return AuthOutcome::Anonymous,
        Some(token) => token,
    };

    let security = match req.app_data::<web::Data<AppState>>() {
        Some(state) => state.security.clone(),
        None => {
            warn!("AppState not available; treating request as anonymous");
            return AuthOutcome::Anonymous;
        }
    };

    let claims = match jwt::decode_claims(&token, &security) {
        Ok(claims) => claims,
        Err(e) => {
            warn!(
                token_error = e.kind(),
                "rejected bearer token; continuing as anonymous"
            );
            return AuthOutcome::Anonymous;
        }
    };

    // Confirm the token against the subject it just yielded. Expected to
    // hold after a successful decode; any failure still means anonymous,
    // never a crash.
    if !jwt::is_valid(&token, &claims.sub, &security) {
        warn!(sub = %claims.sub, "token failed subject validation; continuing as anonymous");
        return AuthOutcome::Anonymous;
    }

    AuthOutcome::Authenticated(AuthenticatedPrincipal::from(claims))
}

/// Parse `Authorization: Bearer <token>`. Anything else (absent header,
/// non-UTF8 value, wrong scheme, empty token) yields `None`.
fn extract_bearer_from_header(header_value: Option<&header::HeaderValue>) -> Option<String> {
    let auth_str = header_value?.to_str().ok()?;

    let parts: Vec<&str> = auth_str.split_whitespace().collect();
    if parts.len() != 2 || parts[0] != "Bearer" {
        return None;
    }

    Some(parts[1].to_string())
}

#[cfg(test)]
mod tests {
    use actix_web::http::header::HeaderValue;

    use super::extract_bearer_from_header;

    #[test]
    fn test_extracts_token_from_bearer_header() {
        let value = HeaderValue::from_static("Bearer abc.def.ghi");
        assert_eq!(
            extract_bearer_from_header(Some(&value)),
            Some("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn test_missing_header_is_anonymous() {
        assert_eq!(extract_bearer_from_header(None), None);
    }

    #[test]
    fn test_wrong_scheme_is_anonymous() {
        let value = HeaderValue::from_static("Token abc");
        assert_eq!(extract_bearer_from_header(Some(&value)), None);
    }

    #[test]
    fn test_empty_token_is_anonymous() {
        let value = HeaderValue::from_static("Bearer ");
        assert_eq!(extract_bearer_from_header(Some(&value)), None);

        let value = HeaderValue::from_static("Bearer");
        assert_eq!(extract_bearer_from_header(Some(&value)), None);
    }

    #[test]
    fn test_extra_parts_are_anonymous() {
        let value = HeaderValue::from_static("Bearer abc def");
        assert_eq!(extract_bearer_from_header(Some(&value)), None);
    }
}

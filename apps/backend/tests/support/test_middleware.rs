//! Test-only middleware that pre-installs a principal, simulating an
//! earlier filter in the chain having authenticated the request.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage};
use backend::auth::principal::AuthenticatedPrincipal;
use futures_util::future::{ready, LocalBoxFuture, Ready};

pub struct InstallPrincipal(pub AuthenticatedPrincipal);

impl<S, B> Transform<S, ServiceRequest> for InstallPrincipal
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = InstallPrincipalMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(InstallPrincipalMiddleware {
            service,
            principal: self.0.clone(),
        }))
    }
}

pub struct InstallPrincipalMiddleware<S> {
    service: S,
    principal: AuthenticatedPrincipal,
}

impl<S, B> Service<ServiceRequest> for InstallPrincipalMiddleware<S>
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
        req.extensions_mut().insert(self.principal.clone());
        Box::pin(self.service.call(req))
    }
}

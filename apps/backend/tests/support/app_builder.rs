//! Test app construction mirroring the production wiring.

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use backend::middleware::bearer_auth::BearerAuth;
use backend::routes;
use backend::state::app_state::AppState;
use serde_json::Value;

/// Build an app with the bearer middleware and the real route table.
pub async fn build_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .wrap(BearerAuth)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}

/// Drive a request that is expected to be rejected and return the
/// response status plus the rendered ProblemDetails body. Extractor and
/// handler errors are rendered into a normal error response by the
/// route service, so this asserts on the response, not on a service
/// `Err`.
pub async fn call_and_read_problem<S>(app: &S, req: Request) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let res = test::call_service(app, req).await;
    let status = res.status();
    let body: Value = test::read_body_json(res).await;
    (status, body)
}

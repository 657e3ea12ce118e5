pub mod bearer_auth;
pub mod cors;
pub mod request_trace;

pub use bearer_auth::BearerAuth;
pub use cors::cors_middleware;
pub use request_trace::RequestTrace;

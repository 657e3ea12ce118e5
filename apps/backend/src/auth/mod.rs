pub mod claims;
pub mod error;
pub mod jwt;
pub mod principal;
pub mod role;

pub use claims::Claims;
pub use error::TokenError;
pub use principal::{AuthOutcome, AuthenticatedPrincipal};
pub use role::Role;

pub mod authenticator;
pub mod bearer;
pub mod identity;
pub mod jwt;

pub use authenticator::{Authenticator, BearerAuthenticator, JwtAuthenticator};
pub use identity::{BearerIdentity, JwtIdentity};

//! Request authenticators.
//!
//! An [`Authenticator`] turns request headers into an identity or a rejection.
//! `RequireAuth` runs one in front of a route and stores the identity in
//! request extensions for the `Authenticated` extractor.

use actix_web::http::header::{self, HeaderMap};

use super::bearer::decode_bearer_token;
use super::identity::{BearerIdentity, JwtIdentity};
use super::jwt::verify_access_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

pub trait Authenticator {
    /// Identity stored in request extensions on success
    type Identity: Clone + 'static;

    /// Scheme name used in logs
    const SCHEME: &'static str;

    fn authenticate(&self, headers: &HeaderMap, state: &AppState)
        -> Result<Self::Identity, AppError>;
}

/// Verifies `Authorization: Bearer <jwt>` (scheme matched case-insensitively).
///
/// Every failure, including a missing header, renders as `Unauthorized`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuthenticator;

impl Authenticator for JwtAuthenticator {
    type Identity = JwtIdentity;

    const SCHEME: &'static str = "jwt";

    fn authenticate(&self, headers: &HeaderMap, state: &AppState) -> Result<JwtIdentity, AppError> {
        let auth_value = headers
            .get(header::AUTHORIZATION)
            .ok_or(AppError::Unauthorized)?
            .to_str()
            .map_err(|_| AppError::Unauthorized)?;

        // Parse "Bearer <token>" format
        let parts: Vec<&str> = auth_value.split_whitespace().collect();
        if parts.len() != 2 || !parts[0].eq_ignore_ascii_case("Bearer") {
            return Err(AppError::Unauthorized);
        }

        verify_access_token(parts[1], &state.security).map(JwtIdentity::from)
    }
}

/// Decodes `Authorization: Bearer bearer_<...>` demo tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct BearerAuthenticator;

impl Authenticator for BearerAuthenticator {
    type Identity = BearerIdentity;

    const SCHEME: &'static str = "bearer";

    fn authenticate(
        &self,
        headers: &HeaderMap,
        _state: &AppState,
    ) -> Result<BearerIdentity, AppError> {
        let token = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AppError::UnauthorizedMissingBearer)?;

        decode_bearer_token(token)
    }
}

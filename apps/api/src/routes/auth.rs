use std::fmt;
use std::time::SystemTime;

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::auth::bearer::issue_bearer_token;
use crate::auth::jwt::mint_access_token;
use crate::error::{AppError, ErrorBody};
use crate::extractors::ValidatedJson;
use crate::logging::{security, Redacted};
use crate::state::app_state::AppState;

/// Subject placed in every minted JWT until a real user store exists.
pub const PLACEHOLDER_SUBJECT: &str = "user_123";

/// Missing fields deserialize as empty and are rejected as invalid credentials.
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    /// Any non-empty pair is accepted; there is no user lookup yet.
    fn check(&self) -> Result<(), AppError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(AppError::InvalidCredentials);
        }
        Ok(())
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &Redacted(&self.email))
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BearerLoginResponse {
    pub access_token: String,
    /// Always `"Bearer"`
    pub token_type: String,
}

/// Login and receive JWT
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Access token issued", body = LoginResponse),
        (status = 400, description = "Body is not valid JSON", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
    ),
    tag = "auth"
)]
pub async fn login(
    body: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let credentials = body.into_inner();
    if let Err(e) = credentials.check() {
        security::login_failed("empty_credentials", &credentials.email);
        return Err(e);
    }

    let access_token = mint_access_token(
        PLACEHOLDER_SUBJECT,
        &credentials.email,
        SystemTime::now(),
        &app_state.security,
    )?;

    info!(email = %Redacted(&credentials.email), scheme = "jwt", "access token issued");

    Ok(HttpResponse::Ok().json(LoginResponse { access_token }))
}

/// Login and receive Bearer token
///
/// The returned token is unsigned and never expires; it is for
/// demonstration only.
#[utoipa::path(
    post,
    path = "/auth/login-bearer",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Bearer token issued", body = BearerLoginResponse),
        (status = 400, description = "Body is not valid JSON", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
    ),
    tag = "auth"
)]
pub async fn login_bearer(body: ValidatedJson<LoginRequest>) -> Result<HttpResponse, AppError> {
    let credentials = body.into_inner();
    if let Err(e) = credentials.check() {
        security::login_failed("empty_credentials", &credentials.email);
        return Err(e);
    }

    let access_token = issue_bearer_token(&credentials.email, SystemTime::now());

    info!(email = %Redacted(&credentials.email), scheme = "bearer", "access token issued");

    Ok(HttpResponse::Ok().json(BearerLoginResponse {
        access_token,
        token_type: "Bearer".to_string(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::post().to(login))
        .route("/login-bearer", web::post().to(login_bearer));
}

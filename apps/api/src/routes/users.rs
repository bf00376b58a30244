use actix_web::{web, HttpResponse, Result};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::{BearerIdentity, JwtIdentity};
use crate::error::{AppError, ErrorBody};
use crate::extractors::Authenticated;
use crate::middleware::RequireAuth;

const DEFAULT_ROLE: &str = "user";

#[derive(Debug, Serialize, ToSchema)]
pub struct MeResponse {
    pub id: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BearerMeResponse {
    pub email: String,
}

/// Current user (JWT)
#[utoipa::path(
    get,
    path = "/users/me",
    responses(
        (status = 200, description = "Identity from the access token", body = MeResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorBody),
    ),
    security(("bearerAuth" = [])),
    tag = "users"
)]
pub async fn me(identity: Authenticated<JwtIdentity>) -> Result<HttpResponse, AppError> {
    let JwtIdentity { sub, email } = identity.into_inner();

    Ok(HttpResponse::Ok().json(MeResponse {
        id: sub,
        email,
        role: DEFAULT_ROLE.to_string(),
    }))
}

/// Current user (Bearer token)
#[utoipa::path(
    get,
    path = "/users/me-bearer",
    responses(
        (status = 200, description = "Email carried by the token", body = BearerMeResponse),
        (status = 401, description = "Missing or malformed token", body = ErrorBody),
    ),
    security(("bearerAuth" = [])),
    tag = "users"
)]
pub async fn me_bearer(identity: Authenticated<BearerIdentity>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(BearerMeResponse {
        email: identity.into_inner().email,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/me")
            .wrap(RequireAuth::jwt())
            .route(web::get().to(me)),
    )
    .service(
        web::resource("/me-bearer")
            .wrap(RequireAuth::bearer())
            .route(web::get().to(me_bearer)),
    );
}

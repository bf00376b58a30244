//! OpenAPI document for the HTTP surface, served at `/docs/json`, with
//! Swagger UI at `/docs`.

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API",
        version = "1.0.0",
        description = "Minimal authentication API with a JWT flow and a demonstration Bearer flow."
    ),
    paths(
        crate::routes::health::health,
        crate::routes::auth::login,
        crate::routes::auth::login_bearer,
        crate::routes::users::me,
        crate::routes::users::me_bearer,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::routes::health::HealthResponse,
        crate::routes::auth::LoginRequest,
        crate::routes::auth::LoginResponse,
        crate::routes::auth::BearerLoginResponse,
        crate::routes::users::MeResponse,
        crate::routes::users::BearerMeResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness"),
        (name = "auth", description = "Token issuance"),
        (name = "users", description = "Authenticated identity"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// The UI is served from `/docs/`; send the bare prefix there.
async fn docs_redirect() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/docs/"))
        .finish()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/docs", web::get().to(docs_redirect)).service(
        SwaggerUi::new("/docs/{_:.*}").url("/docs/json", ApiDoc::openapi()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();

        for path in [
            "/health",
            "/auth/login",
            "/auth/login-bearer",
            "/users/me",
            "/users/me-bearer",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_bearer_security_scheme_registered() {
        let doc = ApiDoc::openapi();

        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearerAuth"));
    }
}

use actix_web::{web, HttpRequest};

use crate::error::AppError;

pub mod auth;
pub mod health;
pub mod users;

/// Register every route the service exposes.
///
/// Shared by `main.rs` and the test app builder so both serve the same table.
/// Guards are attached per resource in `users::configure_routes`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Liveness: /health
    cfg.configure(health::configure_routes);

    // Login: /auth/**
    cfg.service(web::scope("/auth").configure(auth::configure_routes));

    // Identity: /users/**
    cfg.service(web::scope("/users").configure(users::configure_routes));

    // Swagger UI: /docs, OpenAPI document: /docs/json
    cfg.configure(crate::openapi::configure_routes);

    cfg.default_service(web::to(not_found));
}

async fn not_found(req: HttpRequest) -> Result<&'static str, AppError> {
    Err(AppError::not_found(format!(
        "Route {}:{} not found",
        req.method(),
        req.path()
    )))
}

use actix_web::{web, App, HttpServer};
use api::config::AppConfig;
use api::middleware::cors::cors_middleware;
use api::middleware::request_trace::RequestTrace;
use api::middleware::structured_logger::StructuredLogger;
use api::middleware::trace_span::TraceSpan;
use api::routes;
use api::state::app_state::AppState;
use tracing::{error, info, warn};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Configuration comes from the process environment only.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    if config.uses_default_secret() {
        warn!("JWT_SECRET is not set; using the built-in development secret");
    }

    let data = web::Data::new(AppState::from_config(&config));
    let allowed_origins = config.cors_allowed_origins.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&allowed_origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    });

    let server = match server.bind((config.host.as_str(), config.port)) {
        Ok(server) => server,
        Err(e) => {
            error!(host = %config.host, port = config.port, error = %e, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    info!(host = %config.host, port = config.port, "API listening");

    server.run().await
}

//! # TextiFy Admin API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use admin_api::config::AppConfig;
use admin_api::handlers;
use admin_api::observability::RequestIdMiddleware;
use admin_api::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting TextiFy Admin API on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,admin_api=debug,textify_store=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

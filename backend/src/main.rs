mod config;
mod routes;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use config::{ServerSettings, load_detector_config};
use routes::configure_routes;
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let settings = ServerSettings::from_env().map_err(|e| {
        log::error!("Invalid server settings: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let detector_config = load_detector_config(&settings.detector_config).map_err(|e| {
        log::error!("Failed to load detector config: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;
    log::info!(
        "Detector config: {} stages of {}ms, model {}",
        shared::ANALYSIS_STAGES.len(),
        detector_config.stage_delay_ms,
        detector_config.model_version
    );

    if !settings.frontend_dir.exists() {
        log::warn!(
            "Frontend bundle not found at {}; build it with `trunk build` in frontend/",
            settings.frontend_dir.display()
        );
    }

    let detector_config = web::Data::new(detector_config);
    let frontend_dir = settings.frontend_dir.clone();
    let bind_address = settings.bind_address();

    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(detector_config.clone())
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}

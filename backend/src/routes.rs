use actix_files::Files;
use actix_web::{HttpResponse, web};
use log::info;
use serde::Serialize;
use shared::DetectorConfig;
use std::path::PathBuf;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    model_version: String,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: PathBuf) {
    cfg.service(web::resource("/api/config").route(web::get().to(get_config)))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(Files::new("/", frontend_dir).index_file("index.html"));
}

async fn get_config(config: web::Data<DetectorConfig>) -> HttpResponse {
    info!("Serving detector config");
    HttpResponse::Ok().json(config.get_ref())
}

async fn health(config: web::Data<DetectorConfig>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        model_version: config.model_version.clone(),
    })
}

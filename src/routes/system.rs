use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde_json::json;

use crate::config::AppConfig;
use crate::models::AppStartTime;

pub async fn api_info() -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    Ok(HttpResponse::Ok().json(json!({
        "name": config.app.system_name,
        "version": env!("CARGO_PKG_VERSION"),
        "description": "API de suivi des compétences Bac Pro CIEL",
    })))
}

pub async fn health(req: HttpRequest) -> ActixResult<HttpResponse> {
    let uptime = req
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| (chrono::Utc::now() - start.start_datetime).num_seconds());

    Ok(HttpResponse::Ok().json(json!({
        "status": "ok",
        "uptime_seconds": uptime,
        "timestamp": chrono::Utc::now(),
    })))
}

pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(api_info))
        .route("/api/health", web::get().to(health));
}

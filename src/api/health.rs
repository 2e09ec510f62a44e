use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use std::sync::Arc;
use tracing::trace;

use crate::storage::{AccountStore, LinkStore};

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        accounts: web::Data<Arc<dyn AccountStore>>,
        links: web::Data<Arc<dyn LinkStore>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        trace!("Received health check request");

        let now = chrono::Utc::now();
        let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0) as u64;

        // The directories live in process memory, so reachable means healthy.
        let health_response = json!({
            "status": "healthy",
            "timestamp": now.to_rfc3339(),
            "uptime": uptime_seconds,
            "checks": {
                "accounts": { "count": accounts.count().await },
                "links": { "count": links.count().await },
            },
        });

        HttpResponse::Ok()
            .append_header(("Content-Type", "application/json; charset=utf-8"))
            .json(health_response)
    }
}

pub fn health_routes() -> actix_web::Scope {
    web::scope("/health").route("", web::get().to(HealthService::health_check))
}

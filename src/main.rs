use actix_web::{App, HttpServer, web};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tinylink::api::{
    AppStartTime, health_routes, page_routes, redirect_routes, session_key, session_middleware,
};
use tinylink::config::{get_config, init_config};
use tinylink::services::{AccountService, LinkService};
use tinylink::storage::{AccountStore, LinkStore, StorageFactory};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 记录程序启动时间
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    dotenvy::dotenv().ok();
    init_config();
    let config = get_config();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.logging.level.clone()))
        .init();

    let (accounts, links) = StorageFactory::create()
        .await
        .map_err(std::io::Error::other)?;
    info!(
        "Using in-memory directories: {} accounts, {} links",
        accounts.count().await,
        links.count().await
    );

    let account_service = AccountService::new(accounts.clone());
    let link_service = LinkService::new(links.clone());

    let key = session_key(&config.session.secret);
    let cookie_secure = config.session.cookie_secure;

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(accounts.clone()))
            .app_data(web::Data::new(links.clone()))
            .app_data(web::Data::new(account_service.clone()))
            .app_data(web::Data::new(link_service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .wrap(session_middleware(key.clone(), cookie_secure))
            .service(health_routes())
            .service(redirect_routes())
            .service(page_routes())
    })
    .bind(bind_address)?
    .run()
    .await
}

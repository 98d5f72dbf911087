use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::{info, warn};
use user_auth::config::config;
use user_auth::db::{memory::InMemoryUserStore, postgres_service::PostgresService, UserStore};
use user_auth::routes::configure_routes;
use user_auth::service::authentication::AuthenticationSvc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = config();
    let addr = format!("0.0.0.0:{}", config.port);

    let store: Arc<dyn UserStore> = match &config.db_url {
        Some(url) => Arc::new(
            PostgresService::new(url)
                .await
                .map_err(std::io::Error::other)?,
        ),
        None => {
            warn!("POSTGRES_URI not set, users are kept in memory only");
            Arc::new(InMemoryUserStore::new())
        }
    };
    let auth = web::Data::new(AuthenticationSvc::new(store));

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(auth.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}

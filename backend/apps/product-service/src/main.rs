//! Product Service Entry Point

use catalog::{PgProductRepository, catalog_router};
use platform::cache::RedisCache;
use platform::config::{self, DatabaseSettings};
use platform::telemetry;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

const DEFAULT_PORT: u16 = 8082;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing("product_service=info,catalog=info,platform=info,tower_http=info");

    let database = DatabaseSettings::from_env()?;
    let addr = config::listen_addr(DEFAULT_PORT)?;

    let pool = PgPoolOptions::new()
        .max_connections(database.max_connections)
        .connect(&database.url)
        .await?;
    tracing::info!("Connected to database");

    // Connects lazily; Redis being down only costs cache hits
    let cache = RedisCache::open(&config::redis_url())?;

    let app = telemetry::instrument(catalog_router(PgProductRepository::new(pool), cache));

    tracing::info!("product-service listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

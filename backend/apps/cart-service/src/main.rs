//! Cart Service Entry Point

use cart::{HttpCatalogLookup, HttpOrderSubmitter, PgCartRepository, cart_router};
use platform::cache::RedisCache;
use platform::config::{self, DatabaseSettings};
use platform::{http, telemetry};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

const DEFAULT_PORT: u16 = 8084;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing("cart_service=info,cart=info,platform=info,tower_http=info");

    let database = DatabaseSettings::from_env()?;
    let product_service_url = config::required("PRODUCT_SERVICE_URL")?;
    let order_service_url = config::required("ORDER_SERVICE_URL")?;
    let timeout = config::http_timeout()?;
    let addr = config::listen_addr(DEFAULT_PORT)?;

    let pool = PgPoolOptions::new()
        .max_connections(database.max_connections)
        .connect(&database.url)
        .await?;
    tracing::info!("Connected to database");

    let client = http::build_client(timeout)?;
    let cache = RedisCache::open(&config::redis_url())?;

    let app = telemetry::instrument(cart_router(
        PgCartRepository::new(pool),
        HttpCatalogLookup::new(client.clone(), product_service_url),
        HttpOrderSubmitter::new(client, order_service_url),
        cache,
    ));

    tracing::info!("cart-service listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

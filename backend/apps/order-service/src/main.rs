//! Order Service Entry Point
//!
//! Built with the `kafka` feature and `KAFKA_BROKERS` set, created-order
//! events go to Kafka; otherwise they are written to the log.

use order::infra::events::DEFAULT_TOPIC;
use order::{ConfiguredPublisher, PgOrderRepository, TracingEventPublisher, order_router};
use platform::cache::RedisCache;
use platform::config::{self, DatabaseSettings};
use platform::telemetry;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

const DEFAULT_PORT: u16 = 8083;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing("order_service=info,order=info,platform=info,tower_http=info");

    let database = DatabaseSettings::from_env()?;
    let topic = config::optional("KAFKA_TOPIC").unwrap_or_else(|| DEFAULT_TOPIC.to_string());
    let addr = config::listen_addr(DEFAULT_PORT)?;

    let pool = PgPoolOptions::new()
        .max_connections(database.max_connections)
        .connect(&database.url)
        .await?;
    tracing::info!("Connected to database");

    let cache = RedisCache::open(&config::redis_url())?;
    let publisher = publisher(topic)?;

    let app = telemetry::instrument(order_router(PgOrderRepository::new(pool), publisher, cache));

    tracing::info!("order-service listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(feature = "kafka")]
fn publisher(topic: String) -> anyhow::Result<ConfiguredPublisher> {
    match config::optional("KAFKA_BROKERS") {
        Some(brokers) => {
            tracing::info!(%brokers, %topic, "Publishing order events to Kafka");
            Ok(ConfiguredPublisher::Kafka(
                order::KafkaEventPublisher::connect(&brokers, topic)?,
            ))
        }
        None => {
            tracing::warn!("KAFKA_BROKERS is not set; order events go to the log only");
            Ok(ConfiguredPublisher::Tracing(TracingEventPublisher::new(topic)))
        }
    }
}

#[cfg(not(feature = "kafka"))]
fn publisher(topic: String) -> anyhow::Result<ConfiguredPublisher> {
    tracing::info!(%topic, "Built without Kafka; order events go to the log only");
    Ok(ConfiguredPublisher::Tracing(TracingEventPublisher::new(topic)))
}

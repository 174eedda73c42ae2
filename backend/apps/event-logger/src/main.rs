//! Event Logger
//!
//! Consumes the order event topic and writes one log record per message.
//! Offsets are committed automatically; a new consumer group starts from the
//! earliest retained record.

use platform::config;
use platform::telemetry;
use rdkafka::Message;
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};

const DEFAULT_TOPIC: &str = "logs";
const DEFAULT_GROUP_ID: &str = "logging-service";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing("event_logger=info");

    let brokers = config::required("KAFKA_BROKERS")?;
    let topic = config::optional("KAFKA_TOPIC").unwrap_or_else(|| DEFAULT_TOPIC.to_string());
    let group_id =
        config::optional("KAFKA_GROUP_ID").unwrap_or_else(|| DEFAULT_GROUP_ID.to_string());

    let consumer: StreamConsumer = ClientConfig::new()
        .set("bootstrap.servers", &brokers)
        .set("group.id", &group_id)
        .set("enable.auto.commit", "true")
        .set("auto.offset.reset", "earliest")
        .create()?;
    consumer.subscribe(&[topic.as_str()])?;

    tracing::info!(%brokers, %topic, %group_id, "Listening for events");

    loop {
        tokio::select! {
            received = consumer.recv() => {
                let message = match received {
                    Ok(message) => message,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read message");
                        continue;
                    }
                };
                let key = message.key().map(String::from_utf8_lossy).unwrap_or_default();
                let payload = message
                    .payload()
                    .map(String::from_utf8_lossy)
                    .unwrap_or_default();
                tracing::info!(
                    topic = message.topic(),
                    partition = message.partition(),
                    offset = message.offset(),
                    key = %key,
                    payload = %payload,
                    "Event received"
                );
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down");
                return Ok(());
            }
        }
    }
}

//! Event publishers
//!
//! - [`TracingEventPublisher`] writes each event to the log; the default
//!   when no broker is configured.
//! - `KafkaEventPublisher` (feature `kafka`) produces to a topic, keyed by
//!   order id, waiting at most [`DELIVERY_TIMEOUT`] for the broker ack.

use std::time::Duration;

use crate::domain::event::OrderCreatedEvent;
use crate::domain::ports::EventPublisher;
use crate::error::PublishError;

pub const DEFAULT_TOPIC: &str = "logs";
pub const DELIVERY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct TracingEventPublisher {
    topic: String,
}

impl TracingEventPublisher {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
        }
    }
}

impl Default for TracingEventPublisher {
    fn default() -> Self {
        Self::new(DEFAULT_TOPIC)
    }
}

impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: &OrderCreatedEvent) -> Result<(), PublishError> {
        let payload = serde_json::to_string(event)?;
        tracing::info!(
            topic = %self.topic,
            key = %event.key(),
            payload = %payload,
            "OrderCreated event"
        );
        Ok(())
    }
}

#[cfg(feature = "kafka")]
pub use kafka::KafkaEventPublisher;

#[cfg(feature = "kafka")]
mod kafka {
    use rdkafka::config::ClientConfig;
    use rdkafka::error::KafkaError;
    use rdkafka::producer::{FutureProducer, FutureRecord};
    use rdkafka::util::Timeout;

    use super::DELIVERY_TIMEOUT;
    use crate::domain::event::OrderCreatedEvent;
    use crate::domain::ports::EventPublisher;
    use crate::error::PublishError;

    pub struct KafkaEventPublisher {
        producer: FutureProducer,
        topic: String,
    }

    impl KafkaEventPublisher {
        /// Producer creation does not contact the brokers
        pub fn connect(brokers: &str, topic: impl Into<String>) -> Result<Self, KafkaError> {
            let producer: FutureProducer = ClientConfig::new()
                .set("bootstrap.servers", brokers)
                .set(
                    "message.timeout.ms",
                    DELIVERY_TIMEOUT.as_millis().to_string(),
                )
                .create()?;
            Ok(Self {
                producer,
                topic: topic.into(),
            })
        }
    }

    impl EventPublisher for KafkaEventPublisher {
        async fn publish(&self, event: &OrderCreatedEvent) -> Result<(), PublishError> {
            let payload = serde_json::to_string(event)?;
            let key = event.key();
            let record = FutureRecord::to(&self.topic).key(&key).payload(&payload);

            let (partition, offset) = self
                .producer
                .send(record, Timeout::After(DELIVERY_TIMEOUT))
                .await
                .map_err(|(e, _)| PublishError::Delivery(e.to_string()))?;

            tracing::debug!(topic = %self.topic, partition, offset, key = %key, "Event delivered");
            Ok(())
        }
    }
}

/// Publisher picked at startup from configuration
pub enum ConfiguredPublisher {
    Tracing(TracingEventPublisher),
    #[cfg(feature = "kafka")]
    Kafka(KafkaEventPublisher),
}

impl EventPublisher for ConfiguredPublisher {
    async fn publish(&self, event: &OrderCreatedEvent) -> Result<(), PublishError> {
        match self {
            ConfiguredPublisher::Tracing(publisher) => publisher.publish(event).await,
            #[cfg(feature = "kafka")]
            ConfiguredPublisher::Kafka(publisher) => publisher.publish(event).await,
        }
    }
}

use async_trait::async_trait;
use tracing::log::info;
use crate::core::catalog::CatalogResult;
use crate::core::events::DomainEvent;
use crate::gateway::events::EventPublisher;

// LogPublisher writes catalog change events to the process log; a single
// process has no remote consumers, so the log line is the audit trail.
#[derive(Debug)]
pub struct LogPublisher {}

impl LogPublisher {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> CatalogResult<()> {
        let json = serde_json::to_string(event)?;
        info!("published {} event: {}", event.name, json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::factory;

    #[tokio::test]
    async fn test_should_publish_to_log() {
        let data = vec!["a", "b"];
        let event = DomainEvent::added("test-name", "key", &data).expect("build event");
        let publisher = factory::create_publisher();
        publisher.publish(&event).await.expect("should publish");
    }
}

use async_trait::async_trait;
use crate::core::catalog::CatalogResult;
use crate::core::events::DomainEvent;

// EventPublisher abstracts the destination of catalog change events
#[async_trait]
pub(crate) trait EventPublisher: Sync + Send {
    async fn publish(&self, event: &DomainEvent) -> CatalogResult<()>;
}

use std::sync::Arc;
use crate::books::factory::create_book_repository;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;

// builds the catalog service over the seeded in-memory repository; the
// result is shared by every request handler
pub(crate) fn create_catalog_service(config: &Configuration) -> Arc<dyn CatalogService> {
    let book_repository = create_book_repository();
    let events_publisher = create_publisher();
    Arc::new(CatalogServiceImpl::new(config, book_repository, events_publisher))
}

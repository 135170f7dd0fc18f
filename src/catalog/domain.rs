pub mod query;
pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDraft;
use crate::catalog::domain::query::BookQuery;
use crate::core::catalog::CatalogResult;

// CatalogService defines the operations of the book catalog: listing with
// filters, lookup, and the three mutations with their policy checks.
#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn find_books(&self, query: &BookQuery) -> CatalogResult<Vec<BookEntity>>;

    async fn find_book_by_id(&self, id: i64) -> CatalogResult<BookEntity>;

    async fn add_book(&self, draft: &BookDraft) -> CatalogResult<BookEntity>;

    async fn update_book(&self, id: i64, draft: &BookDraft) -> CatalogResult<BookEntity>;

    async fn remove_book(&self, id: i64) -> CatalogResult<BookEntity>;
}

pub mod mem_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::{BookEntity, NewBook};
use crate::core::catalog::CatalogResult;
use crate::core::repository::Repository;

#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity, NewBook> {
    // exact-match lookup backing the duplicate-ISBN policy
    async fn find_by_isbn(&self, isbn: &str) -> CatalogResult<Option<BookEntity>>;
}

use async_trait::async_trait;
use crate::books::domain::model::{BookEntity, NewBook};
use crate::books::domain::validator;
use crate::books::dto::BookDraft;
use crate::books::repository::BookRepository;
use crate::catalog::domain::query::BookQuery;
use crate::catalog::domain::CatalogService;
use crate::core::catalog::{CatalogError, CatalogResult};
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            book_repository,
            events_publisher,
        }
    }

    // runs the field checks and hands back the coerced candidate
    fn checked(draft: &BookDraft) -> CatalogResult<NewBook> {
        let errors = validator::validate(draft);
        if !errors.is_empty() {
            return Err(CatalogError::validation("Validation failed", errors));
        }
        draft.normalized().ok_or_else(|| CatalogError::runtime(
            "draft passed validation but could not be normalized", None))
    }

    // current_id exempts a record from colliding with its own ISBN
    async fn ensure_unique_isbn(&self, isbn: &str, current_id: Option<i64>) -> CatalogResult<()> {
        if let Some(existing) = self.book_repository.find_by_isbn(isbn).await? {
            if current_id != Some(existing.id) {
                return Err(CatalogError::duplicate_isbn("A book with this ISBN already exists"));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn find_books(&self, query: &BookQuery) -> CatalogResult<Vec<BookEntity>> {
        let records = self.book_repository.list().await?;
        Ok(query.apply(records))
    }

    async fn find_book_by_id(&self, id: i64) -> CatalogResult<BookEntity> {
        self.book_repository.get(id).await
    }

    async fn add_book(&self, draft: &BookDraft) -> CatalogResult<BookEntity> {
        let candidate = Self::checked(draft)?;
        let _ = self.ensure_unique_isbn(candidate.isbn.as_str(), None).await?;
        let book = self.book_repository.insert(&candidate).await?;
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "books", book.id.to_string().as_str(), &book)?).await?;
        Ok(book)
    }

    async fn update_book(&self, id: i64, draft: &BookDraft) -> CatalogResult<BookEntity> {
        // an unknown id answers before the body is judged
        let _ = self.book_repository.get(id).await?;
        let candidate = Self::checked(draft)?;
        let _ = self.ensure_unique_isbn(candidate.isbn.as_str(), Some(id)).await?;
        let book = self.book_repository.replace(id, &candidate).await?;
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "books", book.id.to_string().as_str(), &book)?).await?;
        Ok(book)
    }

    async fn remove_book(&self, id: i64) -> CatalogResult<BookEntity> {
        let book = self.book_repository.remove(id).await?;
        let _ = self.events_publisher.publish(&DomainEvent::deleted(
            "books", book.id.to_string().as_str(), &book)?).await?;
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDraft;
    use crate::books::factory::create_book_repository;
    use crate::books::repository::mem_book_repository::MemBookRepository;
    use crate::catalog::domain::query::BookQuery;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::catalog::domain::CatalogService;
    use crate::core::catalog::CatalogError;
    use crate::core::domain::Configuration;
    use crate::gateway::factory::create_publisher;

    fn empty_service() -> CatalogServiceImpl {
        CatalogServiceImpl::new(&Configuration::new(3000),
                                Box::new(MemBookRepository::new()), create_publisher())
    }

    fn seeded_service() -> CatalogServiceImpl {
        CatalogServiceImpl::new(&Configuration::new(3000),
                                create_book_repository(), create_publisher())
    }

    fn draft(title: &str, isbn: &str) -> BookDraft {
        BookDraft::new(title, "author", isbn, 2000, "genre", "description")
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = empty_service();

        let book = catalog_svc.add_book(&draft("  test book  ", "isbn-1")).await.expect("should add book");
        assert_eq!(1, book.id);
        assert_eq!("test book", book.title.as_str());

        let loaded = catalog_svc.find_book_by_id(book.id).await.expect("should return book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_not_add_invalid_book() {
        let catalog_svc = empty_service();

        let res = catalog_svc.add_book(&BookDraft::default()).await;
        match res {
            Err(CatalogError::Validation { message, errors }) => {
                assert_eq!("Validation failed", message.as_str());
                assert_eq!(5, errors.len());
            }
            other => panic!("unexpected result {:?}", other),
        }
        let books = catalog_svc.find_books(&BookQuery::default()).await.expect("should list books");
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_should_not_add_book_with_taken_isbn() {
        let catalog_svc = empty_service();

        let _ = catalog_svc.add_book(&draft("first", "isbn-1")).await.expect("should add book");
        let res = catalog_svc.add_book(&draft("second", "isbn-1")).await;
        assert!(matches!(res, Err(CatalogError::DuplicateIsbn { message: _ })));

        let books = catalog_svc.find_books(&BookQuery::default()).await.expect("should list books");
        assert_eq!(1, books.len());
    }

    #[tokio::test]
    async fn test_should_update_book_keeping_own_isbn() {
        let catalog_svc = empty_service();

        let book = catalog_svc.add_book(&draft("before", "isbn-1")).await.expect("should add book");
        let updated = catalog_svc.update_book(book.id, &draft("after", "isbn-1")).await.expect("should update book");
        assert_eq!(book.id, updated.id);
        assert_eq!("after", updated.title.as_str());
    }

    #[tokio::test]
    async fn test_should_not_update_book_with_taken_isbn() {
        let catalog_svc = empty_service();

        let _ = catalog_svc.add_book(&draft("first", "isbn-1")).await.expect("should add book");
        let second = catalog_svc.add_book(&draft("second", "isbn-2")).await.expect("should add book");

        let res = catalog_svc.update_book(second.id, &draft("second", "isbn-1")).await;
        assert!(matches!(res, Err(CatalogError::DuplicateIsbn { message: _ })));
    }

    #[tokio::test]
    async fn test_should_answer_not_found_before_validation() {
        let catalog_svc = empty_service();

        let res = catalog_svc.update_book(99, &BookDraft::default()).await;
        assert!(matches!(res, Err(CatalogError::NotFound { message: _ })));
    }

    #[tokio::test]
    async fn test_should_not_update_book_with_invalid_draft() {
        let catalog_svc = empty_service();

        let book = catalog_svc.add_book(&draft("before", "isbn-1")).await.expect("should add book");
        let res = catalog_svc.update_book(book.id, &BookDraft::default()).await;
        assert!(matches!(res, Err(CatalogError::Validation { message: _, errors: _ })));

        let loaded = catalog_svc.find_book_by_id(book.id).await.expect("should return book");
        assert_eq!("before", loaded.title.as_str());
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let catalog_svc = empty_service();

        let book = catalog_svc.add_book(&draft("test book", "isbn-1")).await.expect("should add book");
        let removed = catalog_svc.remove_book(book.id).await.expect("should remove book");
        assert_eq!(book, removed);

        let loaded = catalog_svc.find_book_by_id(book.id).await;
        assert!(loaded.is_err());
        let res = catalog_svc.remove_book(book.id).await;
        assert!(matches!(res, Err(CatalogError::NotFound { message: _ })));
    }

    #[tokio::test]
    async fn test_should_find_books_with_query() {
        let catalog_svc = seeded_service();

        let all = catalog_svc.find_books(&BookQuery::default()).await.expect("should list books");
        assert_eq!(3, all.len());

        let by_search = catalog_svc.find_books(&BookQuery::new(Some("orwell"), None, None)).await.expect("should list books");
        assert_eq!(1, by_search.len());
        assert_eq!("1984", by_search[0].title.as_str());

        let by_year = catalog_svc.find_books(&BookQuery::new(None, None, Some("year"))).await.expect("should list books");
        let years: Vec<i32> = by_year.iter().map(|book| book.published_year).collect();
        assert_eq!(vec![1960, 1949, 1925], years);
    }
}

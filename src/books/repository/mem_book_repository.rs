use async_trait::async_trait;
use parking_lot::Mutex;
use crate::books::domain::model::{BookEntity, NewBook};
use crate::books::repository::BookRepository;
use crate::core::catalog::{CatalogError, CatalogResult};
use crate::core::repository::Repository;

// MemBookRepository keeps the catalog in process memory: a locked Vec in
// insertion order plus the id counter. Ids are handed out once and never
// reused, so a deleted id stays retired. The lock is only held for the
// duration of one synchronous operation, never across an await.
#[derive(Debug)]
pub struct MemBookRepository {
    shelf: Mutex<Shelf>,
}

#[derive(Debug)]
struct Shelf {
    records: Vec<BookEntity>,
    next_id: i64,
}

impl MemBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            shelf: Mutex::new(Shelf { records: vec![], next_id: 1 }),
        }
    }

    // the startup catalog: three well-known records with the counter
    // parked just past them
    pub(crate) fn seeded() -> Self {
        let records = vec![
            BookEntity {
                id: 1,
                title: "The Great Gatsby".to_string(),
                author: "F. Scott Fitzgerald".to_string(),
                isbn: "978-0-7432-7356-5".to_string(),
                published_year: 1925,
                genre: "Fiction".to_string(),
                description: "A classic American novel set in the summer of 1922.".to_string(),
            },
            BookEntity {
                id: 2,
                title: "To Kill a Mockingbird".to_string(),
                author: "Harper Lee".to_string(),
                isbn: "978-0-06-112008-4".to_string(),
                published_year: 1960,
                genre: "Fiction".to_string(),
                description: "A gripping tale of racial injustice and childhood innocence.".to_string(),
            },
            BookEntity {
                id: 3,
                title: "1984".to_string(),
                author: "George Orwell".to_string(),
                isbn: "978-0-452-28423-4".to_string(),
                published_year: 1949,
                genre: "Dystopian Fiction".to_string(),
                description: "A dystopian social science fiction novel and cautionary tale.".to_string(),
            },
        ];
        Self {
            shelf: Mutex::new(Shelf { records, next_id: 4 }),
        }
    }
}

#[async_trait]
impl Repository<BookEntity, NewBook> for MemBookRepository {
    async fn list(&self) -> CatalogResult<Vec<BookEntity>> {
        Ok(self.shelf.lock().records.clone())
    }

    async fn get(&self, id: i64) -> CatalogResult<BookEntity> {
        self.shelf.lock().records.iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found("Book not found"))
    }

    async fn insert(&self, candidate: &NewBook) -> CatalogResult<BookEntity> {
        let mut shelf = self.shelf.lock();
        let book = BookEntity::new(shelf.next_id, candidate);
        shelf.next_id += 1;
        shelf.records.push(book.clone());
        Ok(book)
    }

    async fn replace(&self, id: i64, candidate: &NewBook) -> CatalogResult<BookEntity> {
        let mut shelf = self.shelf.lock();
        match shelf.records.iter_mut().find(|book| book.id == id) {
            Some(slot) => {
                *slot = BookEntity::new(id, candidate);
                Ok(slot.clone())
            }
            None => {
                Err(CatalogError::not_found("Book not found"))
            }
        }
    }

    async fn remove(&self, id: i64) -> CatalogResult<BookEntity> {
        let mut shelf = self.shelf.lock();
        match shelf.records.iter().position(|book| book.id == id) {
            Some(index) => {
                Ok(shelf.records.remove(index))
            }
            None => {
                Err(CatalogError::not_found("Book not found"))
            }
        }
    }
}

#[async_trait]
impl BookRepository for MemBookRepository {
    async fn find_by_isbn(&self, isbn: &str) -> CatalogResult<Option<BookEntity>> {
        Ok(self.shelf.lock().records.iter()
            .find(|book| book.isbn == isbn)
            .cloned())
    }
}

use crate::books::repository::mem_book_repository::MemBookRepository;
use crate::books::repository::BookRepository;

// builds the book repository with the startup catalog in place
pub(crate) fn create_book_repository() -> Box<dyn BookRepository> {
    Box::new(MemBookRepository::seeded())
}

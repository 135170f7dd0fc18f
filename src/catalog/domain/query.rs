use serde::Deserialize;
use crate::books::domain::model::BookEntity;

// BookQuery carries the optional listing parameters straight from the
// query string; empty or unknown values degrade to "no filter".
#[derive(Debug, Default, Clone, Deserialize)]
pub(crate) struct BookQuery {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum SortKey {
    Title,
    Author,
    Year,
    Unsorted,
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        match s {
            "title" => SortKey::Title,
            "author" => SortKey::Author,
            "year" => SortKey::Year,
            _ => SortKey::Unsorted,
        }
    }
}

impl BookQuery {
    pub fn new(search: Option<&str>, genre: Option<&str>, sort: Option<&str>) -> Self {
        BookQuery {
            search: search.map(str::to_string),
            genre: genre.map(str::to_string),
            sort: sort.map(str::to_string),
        }
    }

    fn search_term(&self) -> Option<String> {
        self.search.as_ref()
            .filter(|term| !term.is_empty())
            .map(|term| term.to_lowercase())
    }

    // "all" is the selector's catch-all option, not a genre
    fn genre_filter(&self) -> Option<String> {
        self.genre.as_ref()
            .filter(|genre| !genre.is_empty() && genre.as_str() != "all")
            .map(|genre| genre.to_lowercase())
    }

    fn sort_key(&self) -> SortKey {
        self.sort.as_deref().map_or(SortKey::Unsorted, SortKey::from)
    }

    // Pure filter and sort over a snapshot of the records: substring
    // search first, then the genre filter, then a stable sort.
    pub fn apply(&self, mut records: Vec<BookEntity>) -> Vec<BookEntity> {
        if let Some(term) = self.search_term() {
            records.retain(|book| matches_search(book, term.as_str()));
        }
        if let Some(genre) = self.genre_filter() {
            records.retain(|book| book.genre.to_lowercase() == genre);
        }
        match self.sort_key() {
            SortKey::Title => {
                records.sort_by_key(|book| book.title.to_lowercase());
            }
            SortKey::Author => {
                records.sort_by_key(|book| book.author.to_lowercase());
            }
            SortKey::Year => {
                records.sort_by(|a, b| b.published_year.cmp(&a.published_year));
            }
            SortKey::Unsorted => {}
        }
        records
    }
}

fn matches_search(book: &BookEntity, term: &str) -> bool {
    book.title.to_lowercase().contains(term)
        || book.author.to_lowercase().contains(term)
        || book.genre.to_lowercase().contains(term)
}

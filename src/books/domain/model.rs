use serde::{Deserialize, Serialize};

// BookEntity abstracts a single catalog record; its id is assigned by the
// repository on insert and never changes afterwards, deletions included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookEntity {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: i32,
    pub genre: String,
    pub description: String,
}

// NewBook carries every field of a record except the id: already trimmed,
// coerced and past validation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: i32,
    pub genre: String,
    pub description: String,
}

impl BookEntity {
    pub fn new(id: i64, candidate: &NewBook) -> Self {
        Self {
            id,
            title: candidate.title.to_string(),
            author: candidate.author.to_string(),
            isbn: candidate.isbn.to_string(),
            published_year: candidate.published_year,
            genre: candidate.genre.to_string(),
            description: candidate.description.to_string(),
        }
    }
}

impl NewBook {
    pub fn new(title: &str, author: &str, isbn: &str, published_year: i32,
               genre: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            published_year,
            genre: genre.to_string(),
            description: description.to_string(),
        }
    }
}

use serde::Deserialize;
use serde_json::Value;
use crate::books::domain::model::NewBook;

// BookDraft is the request-body shape for create and update. Every field
// is optional so an incomplete body still reaches the validator, and
// publishedYear stays a raw JSON value because clients send it either as
// a number or as a numeric string.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct BookDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub published_year: Option<Value>,
    pub genre: Option<String>,
    pub description: Option<String>,
}

impl BookDraft {
    pub fn new(title: &str, author: &str, isbn: &str, published_year: i32,
               genre: &str, description: &str) -> BookDraft {
        BookDraft {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            isbn: Some(isbn.to_string()),
            published_year: Some(Value::from(published_year)),
            genre: Some(genre.to_string()),
            description: Some(description.to_string()),
        }
    }

    // publishedYear as an integer, however the client encoded it; strings
    // must parse in full, fractional numbers do not count
    pub fn parsed_year(&self) -> Option<i32> {
        match self.published_year.as_ref()? {
            Value::Number(number) => number.as_i64().and_then(|year| i32::try_from(year).ok()),
            Value::String(raw) => raw.trim().parse::<i32>().ok(),
            _ => None,
        }
    }

    // trimmed, coerced candidate; None unless every required field is usable
    pub fn normalized(&self) -> Option<NewBook> {
        Some(NewBook {
            title: non_blank(self.title.as_deref())?,
            author: non_blank(self.author.as_deref())?,
            isbn: non_blank(self.isbn.as_deref())?,
            published_year: self.parsed_year()?,
            genre: non_blank(self.genre.as_deref())?,
            description: self.description.as_deref().unwrap_or("").trim().to_string(),
        })
    }
}

fn non_blank(field: Option<&str>) -> Option<String> {
    let trimmed = field?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

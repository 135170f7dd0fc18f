use chrono::{Datelike, Utc};
use crate::books::dto::BookDraft;

// oldest publication year the catalog accepts
pub const MIN_PUBLISHED_YEAR: i32 = 1000;

// Field checks for a candidate record; every failing check contributes
// its own message and the caller decides whether the draft proceeds.
pub(crate) fn validate(draft: &BookDraft) -> Vec<String> {
    let mut errors = vec![];
    if is_blank(draft.title.as_deref()) {
        errors.push("Title is required".to_string());
    }
    if is_blank(draft.author.as_deref()) {
        errors.push("Author is required".to_string());
    }
    if is_blank(draft.isbn.as_deref()) {
        errors.push("ISBN is required".to_string());
    }
    let current_year = Utc::now().year();
    match draft.parsed_year() {
        Some(year) if (MIN_PUBLISHED_YEAR..=current_year).contains(&year) => {}
        _ => {
            errors.push("Valid published year is required".to_string());
        }
    }
    if is_blank(draft.genre.as_deref()) {
        errors.push("Genre is required".to_string());
    }
    errors
}

fn is_blank(field: Option<&str>) -> bool {
    field.map_or(true, |value| value.trim().is_empty())
}

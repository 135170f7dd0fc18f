use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum CatalogError {
    Validation {
        message: String,
        errors: Vec<String>,
    },
    DuplicateIsbn {
        message: String,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        detail: Option<String>,
    },
}

impl CatalogError {
    pub fn validation(message: &str, errors: Vec<String>) -> CatalogError {
        CatalogError::Validation { message: message.to_string(), errors }
    }

    pub fn duplicate_isbn(message: &str) -> CatalogError {
        CatalogError::DuplicateIsbn { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> CatalogError {
        CatalogError::NotFound { message: message.to_string() }
    }

    pub fn runtime(message: &str, detail: Option<String>) -> CatalogError {
        CatalogError::Runtime { message: message.to_string(), detail }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::runtime(
            "serde json parsing", Some(format!("{:?}", err)))
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Validation { message, errors } => {
                write!(f, "{} {:?}", message, errors)
            }
            CatalogError::DuplicateIsbn { message } => {
                write!(f, "{}", message)
            }
            CatalogError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Runtime { message, detail } => {
                write!(f, "{} {:?}", message, detail)
            }
        }
    }
}

/// A specialized Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use crate::core::catalog::CatalogError;

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(CatalogError::validation("test", vec![]), CatalogError::Validation{ message: _, errors: _ }));
    }

    #[tokio::test]
    async fn test_should_create_duplicate_isbn_error() {
        assert!(matches!(CatalogError::duplicate_isbn("test"), CatalogError::DuplicateIsbn{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(CatalogError::not_found("test"), CatalogError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(CatalogError::runtime("test", None), CatalogError::Runtime{ message: _, detail: _ }));
    }

    #[tokio::test]
    async fn test_should_convert_serde_error() {
        let err = serde_json::from_str::<i64>("not a number").unwrap_err();
        assert!(matches!(CatalogError::from(err), CatalogError::Runtime{ message: _, detail: _ }));
    }

    #[tokio::test]
    async fn test_should_format_errors() {
        let err = CatalogError::validation("Validation failed", vec!["Title is required".to_string()]);
        assert!(err.to_string().contains("Validation failed"));
        assert_eq!("Book not found", CatalogError::not_found("Book not found").to_string());
    }
}

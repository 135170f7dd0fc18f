use async_trait::async_trait;
use crate::core::catalog::CatalogError;

#[derive(Debug)]
pub enum CommandError {
    InvalidId {
        message: String,
    },
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

impl CommandError {
    pub fn invalid_id(message: &str) -> CommandError {
        CommandError::InvalidId { message: message.to_string() }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<CatalogError> for CommandError {
    fn from(other: CatalogError) -> Self {
        match other {
            CatalogError::Validation { message, errors } => {
                CommandError::Validation { message, errors }
            }
            CatalogError::DuplicateIsbn { message } => {
                CommandError::DuplicateIsbn { message }
            }
            CatalogError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            CatalogError::Runtime { message, detail } => {
                CommandError::Runtime { message, detail }
            }
        }
    }
}

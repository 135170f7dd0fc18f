use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDraft;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct UpdateBookCommandRequest {
    pub(crate) id: i64,
    pub(crate) draft: BookDraft,
}

impl UpdateBookCommandRequest {
    pub fn new(id: i64, draft: BookDraft) -> Self {
        Self {
            id,
            draft,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookEntity,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.id, &req.draft).await
            .map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDraft;
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_update_book() {
        let svc = factory::create_catalog_service(&Configuration::new(3000));
        let cmd = UpdateBookCommand::new(svc);

        let draft = BookDraft::new("Nineteen Eighty-Four", "George Orwell", "978-0-452-28423-4", 1949, "Dystopian Fiction", "");
        let res = cmd.execute(UpdateBookCommandRequest::new(3, draft)).await.expect("should update book");
        assert_eq!(3, res.book.id);
        assert_eq!("Nineteen Eighty-Four", res.book.title.as_str());
    }

    #[tokio::test]
    async fn test_should_fail_update_unknown_book() {
        let svc = factory::create_catalog_service(&Configuration::new(3000));
        let cmd = UpdateBookCommand::new(svc);

        let draft = BookDraft::new("title", "author", "isbn-update-cmd", 2000, "genre", "");
        let res = cmd.execute(UpdateBookCommandRequest::new(99, draft)).await;
        assert!(matches!(res, Err(CommandError::NotFound { message: _ })));
    }
}

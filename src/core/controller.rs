use std::sync::Arc;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use serde_json::Value;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) service: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration, service: Arc<dyn CatalogService>) -> AppState {
        AppState {
            config,
            service,
        }
    }
}

// ApiResponse is the envelope every JSON route answers with; optional
// fields stay out of the payload entirely when unused.
#[derive(Debug, Serialize)]
pub(crate) struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn data(data: Value) -> ApiResponse {
        ApiResponse { success: true, count: None, message: None, data: Some(data), errors: None, error: None }
    }

    pub fn listing(count: usize, data: Value) -> ApiResponse {
        ApiResponse { success: true, count: Some(count), message: None, data: Some(data), errors: None, error: None }
    }

    pub fn with_message(message: &str, data: Value) -> ApiResponse {
        ApiResponse { success: true, count: None, message: Some(message.to_string()), data: Some(data), errors: None, error: None }
    }

    pub fn failure(message: &str) -> ApiResponse {
        ApiResponse { success: false, count: None, message: Some(message.to_string()), data: None, errors: None, error: None }
    }

    pub fn validation_failure(message: &str, errors: Vec<String>) -> ApiResponse {
        ApiResponse { success: false, count: None, message: Some(message.to_string()), data: None, errors: Some(errors), error: None }
    }

    pub fn runtime_failure(message: &str, error: Option<String>) -> ApiResponse {
        ApiResponse { success: false, count: None, message: Some(message.to_string()), data: None, errors: None, error }
    }
}

pub(crate) type ServerError = (StatusCode, Json<ApiResponse>);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, Json(ApiResponse::failure(format!("{}", err).as_str())))
}

pub fn rejection_to_server_error(err: JsonRejection) -> ServerError {
    (StatusCode::BAD_REQUEST, Json(ApiResponse::failure(format!("{}", err).as_str())))
}

// serializes a response payload for the envelope; a failure here is a
// server-side bug rather than bad client input
pub(crate) fn encode_data<T: Serialize>(value: &T) -> Result<Value, ServerError> {
    serde_json::to_value(value).map_err(|err| {
        (StatusCode::INTERNAL_SERVER_ERROR,
         Json(ApiResponse::runtime_failure("Internal server error", Some(format!("{}", err)))))
    })
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::InvalidId { message } => {
                (StatusCode::BAD_REQUEST, Json(ApiResponse::failure(message.as_str())))
            }
            CommandError::Validation { message, errors } => {
                (StatusCode::BAD_REQUEST, Json(ApiResponse::validation_failure(message.as_str(), errors)))
            }
            CommandError::DuplicateIsbn { message } => {
                (StatusCode::CONFLICT, Json(ApiResponse::failure(message.as_str())))
            }
            CommandError::NotFound { message } => {
                (StatusCode::NOT_FOUND, Json(ApiResponse::failure(message.as_str())))
            }
            CommandError::Runtime { detail, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ApiResponse::runtime_failure("Internal server error", detail)))
            }
        }
    }
}

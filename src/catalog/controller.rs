use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use crate::books::dto::BookDraft;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::catalog::domain::query::BookQuery;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{encode_data, json_to_server_error, rejection_to_server_error,
                              ApiResponse, AppState, ServerError};

// The full application router: the API routes, permissive CORS for the
// browser client, request tracing, and a static-asset fallback so any
// path outside /api lands on the public directory first and on the JSON
// 404 envelope after that. Unsupported methods on API paths answer with
// the same envelope.
pub(crate) fn catalog_routes(state: AppState) -> Router {
    let static_assets = ServeDir::new(state.config.public_dir.as_str())
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(route_not_found.into_service());
    Router::new()
        .route("/api/books",
               get(find_books).post(add_book).fallback(route_not_found))
        .route("/api/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book).fallback(route_not_found))
        .fallback_service(static_assets)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(state)
}

pub(crate) async fn find_books(
    State(state): State<AppState>,
    Query(query): Query<BookQuery>) -> Result<(StatusCode, Json<ApiResponse>), ServerError> {
    let req = ListBooksCommandRequest::new(query);
    let res = ListBooksCommand::new(state.service.clone()).execute(req).await?;
    let data = encode_data(&res.books)?;
    Ok((StatusCode::OK, Json(ApiResponse::listing(res.count, data))))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>) -> Result<(StatusCode, Json<ApiResponse>), ServerError> {
    let req = GetBookCommandRequest::new(parse_book_id(id.as_str())?);
    let res = GetBookCommand::new(state.service.clone()).execute(req).await?;
    let data = encode_data(&res.book)?;
    Ok((StatusCode::OK, Json(ApiResponse::data(data))))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>) -> Result<(StatusCode, Json<ApiResponse>), ServerError> {
    let Json(body) = payload.map_err(rejection_to_server_error)?;
    let draft: BookDraft = serde_json::from_value(body).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.service.clone()).execute(AddBookCommandRequest::new(draft)).await?;
    let data = encode_data(&res.book)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::with_message("Book created successfully", data))))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>) -> Result<(StatusCode, Json<ApiResponse>), ServerError> {
    let book_id = parse_book_id(id.as_str())?;
    let Json(body) = payload.map_err(rejection_to_server_error)?;
    let draft: BookDraft = serde_json::from_value(body).map_err(json_to_server_error)?;
    let res = UpdateBookCommand::new(state.service.clone()).execute(UpdateBookCommandRequest::new(book_id, draft)).await?;
    let data = encode_data(&res.book)?;
    Ok((StatusCode::OK, Json(ApiResponse::with_message("Book updated successfully", data))))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(id): Path<String>) -> Result<(StatusCode, Json<ApiResponse>), ServerError> {
    let req = RemoveBookCommandRequest::new(parse_book_id(id.as_str())?);
    let res = RemoveBookCommand::new(state.service.clone()).execute(req).await?;
    let data = encode_data(&res.book)?;
    Ok((StatusCode::OK, Json(ApiResponse::with_message("Book deleted successfully", data))))
}

// catch-all for paths and methods the API does not define
pub(crate) async fn route_not_found() -> (StatusCode, Json<ApiResponse>) {
    (StatusCode::NOT_FOUND, Json(ApiResponse::failure("Route not found")))
}

// the whole path segment must be numeric, "12abc" does not count
fn parse_book_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse::<i64>().map_err(|_| CommandError::invalid_id("Invalid book ID").into())
}

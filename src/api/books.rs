//! Book endpoints
//!
//! Responses use the `{status, message?, data?}` envelope; failures render
//! as `{status: "fail", message}` via [`crate::error::AppError`].

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::book::{Book, BookListQuery, BookSummary},
};

/// Envelope for the book list
#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub status: String,
    pub data: BookListData,
}

#[derive(Serialize, ToSchema)]
pub struct BookListData {
    pub books: Vec<BookSummary>,
}

/// Envelope for a single book
#[derive(Serialize, ToSchema)]
pub struct BookDetailResponse {
    pub status: String,
    pub data: BookDetailData,
}

#[derive(Serialize, ToSchema)]
pub struct BookDetailData {
    pub book: Book,
}

/// Envelope for a successful creation
#[derive(Serialize, ToSchema)]
pub struct BookCreatedResponse {
    pub status: String,
    pub message: String,
    pub data: BookCreatedData,
}

#[derive(Serialize, ToSchema)]
pub struct BookCreatedData {
    #[serde(rename = "bookId")]
    pub book_id: String,
}

/// Envelope for message-only successes (update, delete)
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}

fn success() -> String {
    "success".to_string()
}

/// Get all books, optionally filtered by query params
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookListQuery),
    responses(
        (status = 200, description = "List of books (id, name, publisher)", body = BookListResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookListQuery>,
) -> Json<BookListResponse> {
    let books = state.services.books.list(&query).await;

    Json(BookListResponse {
        status: success(),
        data: BookListData { books },
    })
}

/// Get book detail by bookId
#[utoipa::path(
    get,
    path = "/books/{book_id}",
    tag = "books",
    params(
        ("book_id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookDetailResponse),
        (status = 404, description = "Book not found", body = crate::error::FailResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<BookDetailResponse>> {
    let book = state.services.books.get_by_id(&book_id).await?;

    Ok(Json(BookDetailResponse {
        status: success(),
        data: BookDetailData { book },
    }))
}

/// Store book from input
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Object,
    responses(
        (status = 201, description = "Book created", body = BookCreatedResponse),
        (status = 400, description = "Invalid payload", body = crate::error::FailResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(payload): Json<Value>,
) -> AppResult<(StatusCode, Json<BookCreatedResponse>)> {
    let book_id = state.services.books.create(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookCreatedResponse {
            status: success(),
            message: "Buku berhasil ditambahkan".to_string(),
            data: BookCreatedData { book_id },
        }),
    ))
}

/// Update book from input and params
#[utoipa::path(
    put,
    path = "/books/{book_id}",
    tag = "books",
    params(
        ("book_id" = String, Path, description = "Book ID")
    ),
    request_body = Object,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Invalid payload", body = crate::error::FailResponse),
        (status = 404, description = "Book not found", body = crate::error::FailResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
    Json(payload): Json<Value>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.update(&book_id, &payload).await?;

    Ok(Json(MessageResponse {
        status: success(),
        message: "Buku berhasil diperbarui".to_string(),
    }))
}

/// Delete book from params
#[utoipa::path(
    delete,
    path = "/books/{book_id}",
    tag = "books",
    params(
        ("book_id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::FailResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.delete(&book_id).await?;

    Ok(Json(MessageResponse {
        status: success(),
        message: "Buku berhasil dihapus".to_string(),
    }))
}

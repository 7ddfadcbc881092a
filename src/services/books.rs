//! Books service

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookListQuery, BookSummary},
    repository::Repository,
    validation::{validate_book_payload, WriteKind},
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List books, AND-combining the present filters, projected to
    /// `{id, name, publisher}`.
    ///
    /// The reading/finished filters compare against the literal query value:
    /// "1" selects true, any other value selects false.
    pub async fn list(&self, query: &BookListQuery) -> Vec<BookSummary> {
        let name_needle = query.name.as_deref().map(str::to_lowercase);

        self.repository
            .books
            .all()
            .iter()
            .filter(|b| match query.reading.as_deref() {
                Some(value) => b.reading == (value == "1"),
                None => true,
            })
            .filter(|b| match query.finished.as_deref() {
                Some(value) => b.finished == (value == "1"),
                None => true,
            })
            .filter(|b| match &name_needle {
                Some(needle) => b.name.to_lowercase().contains(needle),
                None => true,
            })
            .map(Book::to_summary)
            .collect()
    }

    /// Get the full record for a book id
    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        self.repository
            .books
            .find_by_id(id)
            .ok_or_else(|| AppError::NotFound("Buku tidak ditemukan".to_string()))
    }

    /// Validate and store a new book, returning its generated id
    pub async fn create(&self, payload: &Value) -> AppResult<String> {
        let draft = validate_book_payload(WriteKind::Create, payload)?;

        let book = Book::from_draft(draft, Uuid::new_v4().to_string(), Utc::now());
        let id = book.id.clone();
        self.repository.books.insert(book);

        tracing::debug!(book_id = %id, "book created");
        Ok(id)
    }

    /// Validate and replace an existing book, preserving id and inserted_at
    pub async fn update(&self, id: &str, payload: &Value) -> AppResult<()> {
        let draft = validate_book_payload(WriteKind::Update, payload)?;

        let current = self.repository.books.find_by_id(id).ok_or_else(|| {
            AppError::NotFound("Gagal memperbarui buku. Id tidak ditemukan".to_string())
        })?;

        let replacement = current.updated_with(draft, Utc::now());
        self.repository.books.replace(replacement);
        Ok(())
    }

    /// Delete a book by id
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.repository.books.remove(id) {
            tracing::warn!(book_id = %id, "delete requested for unknown book");
            return Err(AppError::NotFound(
                "Buku gagal dihapus. Id tidak ditemukan".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service() -> BooksService {
        BooksService::new(Repository::new())
    }

    fn payload(name: &str, page_count: u32, read_page: u32, reading: bool) -> Value {
        json!({
            "name": name,
            "year": 2020,
            "author": "A",
            "summary": "s",
            "publisher": "P",
            "pageCount": page_count,
            "readPage": read_page,
            "reading": reading
        })
    }

    #[tokio::test]
    async fn create_derives_finished() {
        let svc = service();

        let done = svc.create(&payload("Done", 100, 100, false)).await.unwrap();
        let partial = svc.create(&payload("Partial", 100, 30, true)).await.unwrap();

        assert!(svc.get_by_id(&done).await.unwrap().finished);
        assert!(!svc.get_by_id(&partial).await.unwrap().finished);
    }

    #[tokio::test]
    async fn create_round_trip_preserves_fields() {
        let svc = service();
        let id = svc.create(&payload("Alpha", 100, 100, false)).await.unwrap();

        let book = svc.get_by_id(&id).await.unwrap();
        assert_eq!(book.id, id);
        assert_eq!(book.name, "Alpha");
        assert_eq!(book.year, 2020);
        assert_eq!(book.author, "A");
        assert_eq!(book.summary, "s");
        assert_eq!(book.publisher, "P");
        assert_eq!(book.page_count, 100);
        assert_eq!(book.read_page, 100);
        assert!(!book.reading);
        assert!(book.finished);
        assert_eq!(book.inserted_at, book.updated_at);
    }

    #[tokio::test]
    async fn create_rejects_read_page_beyond_page_count() {
        let svc = service();
        let err = svc.create(&payload("Bad", 50, 51, false)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(svc.list(&BookListQuery::default()).await.is_empty());
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let svc = service();
        let err = svc.get_by_id("missing").await.unwrap_err();
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "Buku tidak ditemukan"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_preserves_id_and_inserted_at() {
        let svc = service();
        let id = svc.create(&payload("Alpha", 100, 10, true)).await.unwrap();
        let created = svc.get_by_id(&id).await.unwrap();

        svc.update(&id, &payload("Alpha II", 100, 100, false))
            .await
            .unwrap();

        let updated = svc.get_by_id(&id).await.unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.inserted_at, created.inserted_at);
        assert_eq!(updated.name, "Alpha II");
        assert!(updated.finished);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_replaces_the_matched_record_not_the_first() {
        let svc = service();
        let first = svc.create(&payload("First", 10, 0, false)).await.unwrap();
        let second = svc.create(&payload("Second", 10, 0, false)).await.unwrap();

        svc.update(&second, &payload("Second Edition", 10, 10, false))
            .await
            .unwrap();

        assert_eq!(svc.get_by_id(&first).await.unwrap().name, "First");
        assert_eq!(
            svc.get_by_id(&second).await.unwrap().name,
            "Second Edition"
        );
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let svc = service();
        let err = svc
            .update("missing", &payload("X", 10, 0, false))
            .await
            .unwrap_err();
        match err {
            AppError::NotFound(msg) => {
                assert_eq!(msg, "Gagal memperbarui buku. Id tidak ditemukan")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn delete_is_not_idempotent() {
        let svc = service();
        let id = svc.create(&payload("Alpha", 10, 0, false)).await.unwrap();

        svc.delete(&id).await.unwrap();
        let err = svc.delete(&id).await.unwrap_err();
        match err {
            AppError::NotFound(msg) => {
                assert_eq!(msg, "Buku gagal dihapus. Id tidak ditemukan")
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(svc.get_by_id(&id).await.is_err());
    }

    #[tokio::test]
    async fn list_filters_and_compose() {
        let svc = service();
        svc.create(&payload("Alpha", 100, 100, true)).await.unwrap();
        svc.create(&payload("Beta", 100, 100, false)).await.unwrap();
        svc.create(&payload("Alpine Guide", 100, 10, true))
            .await
            .unwrap();

        // reading=1 AND finished=1 intersect instead of the last filter winning
        let query = BookListQuery {
            reading: Some("1".to_string()),
            finished: Some("1".to_string()),
            name: None,
        };
        let result = svc.list(&query).await;
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Alpha");

        // reading=0 selects non-reading books; 0 is a present filter value
        let query = BookListQuery {
            reading: Some("0".to_string()),
            ..Default::default()
        };
        let result = svc.list(&query).await;
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Beta");
    }

    #[tokio::test]
    async fn list_name_filter_is_case_insensitive_substring() {
        let svc = service();
        svc.create(&payload("Alpha", 100, 100, false)).await.unwrap();
        svc.create(&payload("Beta", 100, 100, false)).await.unwrap();

        let query = BookListQuery {
            name: Some("alp".to_string()),
            ..Default::default()
        };
        let result = svc.list(&query).await;
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Alpha");
        assert_eq!(result[0].publisher, "P");
    }
}

//! Books repository
//!
//! An ordered in-memory collection, kept in insertion order. Lookups are
//! linear scans; the collection is small and unindexed. The lock makes each
//! operation atomic under axum's multi-threaded runtime.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::book::Book;

#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records in insertion order
    pub fn all(&self) -> Vec<Book> {
        self.books.read().clone()
    }

    /// Find a record by id
    pub fn find_by_id(&self, id: &str) -> Option<Book> {
        self.books.read().iter().find(|b| b.id == id).cloned()
    }

    /// Append a record
    pub fn insert(&self, book: Book) {
        self.books.write().push(book);
    }

    /// Replace the record with the same id, keeping its position.
    /// Returns false if no record matches.
    pub fn replace(&self, book: Book) -> bool {
        let mut books = self.books.write();
        match books.iter().position(|b| b.id == book.id) {
            Some(index) => {
                books[index] = book;
                true
            }
            None => false,
        }
    }

    /// Remove the record with the given id. Returns false if absent.
    pub fn remove(&self, id: &str) -> bool {
        let mut books = self.books.write();
        let before = books.len();
        books.retain(|b| b.id != id);
        books.len() < before
    }
}

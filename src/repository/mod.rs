//! Repository layer for the in-memory record store

pub mod books;

/// Main repository struct holding the process-local stores
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

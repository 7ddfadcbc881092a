//! Book model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Book record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
    /// Derived from page_count and read_page at write time
    pub finished: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Build a new record from a validated draft, stamping id and timestamps
    pub fn from_draft(draft: BookDraft, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            finished: draft.page_count == draft.read_page,
            name: draft.name,
            year: draft.year,
            author: draft.author,
            summary: draft.summary,
            publisher: draft.publisher,
            page_count: draft.page_count,
            read_page: draft.read_page,
            reading: draft.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Build the replacement record for an update, preserving id and inserted_at
    pub fn updated_with(&self, draft: BookDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            finished: draft.page_count == draft.read_page,
            name: draft.name,
            year: draft.year,
            author: draft.author,
            summary: draft.summary,
            publisher: draft.publisher,
            page_count: draft.page_count,
            read_page: draft.read_page,
            reading: draft.reading,
            inserted_at: self.inserted_at,
            updated_at: now,
        }
    }

    /// Projection used by the list endpoint
    pub fn to_summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

/// Short book record for list responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

/// A write payload that passed validation. Timestamps, id, and the derived
/// finished flag are never taken from the client.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

/// Query parameters for the book list endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct BookListQuery {
    /// "1" matches reading books, any other value matches non-reading ones
    pub reading: Option<String>,
    /// "1" matches finished books, any other value matches unfinished ones
    pub finished: Option<String>,
    /// Case-insensitive substring match on the book name
    pub name: Option<String>,
}

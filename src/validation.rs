//! Book payload validation
//!
//! Create and update share one rule pipeline so the two paths cannot drift;
//! only the message prefix differs. Rules run in a fixed order and the first
//! violation wins.

use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::book::BookDraft,
};

/// Which write operation a payload is validated for. Selects the wording of
/// failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    Create,
    Update,
}

impl WriteKind {
    fn prefix(self) -> &'static str {
        match self {
            WriteKind::Create => "Gagal menambahkan buku",
            WriteKind::Update => "Gagal memperbarui buku",
        }
    }
}

/// Validate an untyped JSON payload and produce a typed draft.
///
/// Presence means "field exists and is not null": a `readPage` or
/// `pageCount` of 0 is a valid value, not a missing field.
pub fn validate_book_payload(kind: WriteKind, payload: &Value) -> AppResult<BookDraft> {
    let prefix = kind.prefix();

    let name = require_text(payload, "name", prefix, "Mohon isi nama buku")?;

    let year = field(payload, "year").ok_or_else(|| fail(prefix, "Mohon isi tahun buku"))?;
    let year = year
        .as_i64()
        .and_then(|y| i32::try_from(y).ok())
        .ok_or_else(|| fail(prefix, "Tahun buku hanya bisa angka"))?;

    let author = require_text(payload, "author", prefix, "Mohon isi penulis buku")?;
    let summary = require_text(payload, "summary", prefix, "Mohon isi summary buku")?;
    let publisher = require_text(payload, "publisher", prefix, "Mohon isi penerbit buku")?;

    let page_count = field(payload, "pageCount")
        .ok_or_else(|| fail(prefix, "Mohon isi total halaman buku"))?;
    let page_count = as_page_number(page_count)
        .ok_or_else(|| fail(prefix, "Total halaman buku hanya bisa angka"))?;

    let read_page = field(payload, "readPage")
        .ok_or_else(|| fail(prefix, "Mohon isi halaman yang dibaca pada buku"))?;
    let read_page = as_page_number(read_page)
        .ok_or_else(|| fail(prefix, "Halaman buku yang dibaca hanya bisa angka"))?;

    if read_page > page_count {
        return Err(fail(
            prefix,
            "readPage tidak boleh lebih besar dari pageCount",
        ));
    }

    let reading = field(payload, "reading")
        .and_then(Value::as_bool)
        .ok_or_else(|| fail(prefix, "Reading hanya bisa boolean"))?;

    Ok(BookDraft {
        name,
        year,
        author,
        summary,
        publisher,
        page_count,
        read_page,
        reading,
    })
}

fn fail(prefix: &str, detail: &str) -> AppError {
    AppError::Validation(format!("{}. {}", prefix, detail))
}

/// Field lookup treating JSON null as absent
fn field<'a>(payload: &'a Value, name: &str) -> Option<&'a Value> {
    payload.get(name).filter(|v| !v.is_null())
}

fn require_text(payload: &Value, name: &str, prefix: &str, detail: &str) -> AppResult<String> {
    field(payload, name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| fail(prefix, detail))
}

fn as_page_number(value: &Value) -> Option<u32> {
    value.as_i64().and_then(|n| u32::try_from(n).ok())
}

//! Catalog Records
//!
//! Wire types exchanged with the BookHive REST API and the identity provider.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote API when a book is created
pub type BookId = u64;

/// A persisted book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
}

/// Scratch state for the create/edit dialog.
///
/// `id` is `None` for a book that has not been persisted yet. The create
/// request body omits it; the update request body carries it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BookId>,
}

impl BookDraft {
    /// Empty draft for the "Add" action
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether saving this draft creates a new record
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Set a single form field
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        match field {
            DraftField::Title => self.title = value.into(),
            DraftField::Author => self.author = value.into(),
        }
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            id: Some(book.id),
        }
    }
}

/// Editable fields of a [`BookDraft`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Author,
}

/// A downloadable PDF listed by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub name: String,
    pub url: String,
}

/// Identity of the signed-in user as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub picture: String,
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

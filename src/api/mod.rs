//! REST API Client
//!
//! The [`BookApi`] trait is the seam every view controller talks through.
//! [`HttpBookApi`] is the `reqwest` implementation used in the browser.

mod client;
mod endpoints;
mod error;

#[cfg(test)]
pub(crate) mod mock;
#[cfg(test)]
pub(crate) mod stub;

pub use client::HttpBookApi;
pub use endpoints::Endpoints;
pub use error::{ApiError, ApiResult};

use async_trait::async_trait;

use crate::models::{Book, BookDraft, BookId, DocumentRef};

/// Operations offered by the BookHive REST API.
///
/// Futures are not `Send`: the browser executor is single-threaded.
#[async_trait(?Send)]
pub trait BookApi {
    /// `GET books/`
    async fn list_books(&self) -> ApiResult<Vec<Book>>;

    /// `POST books/` with `{title, author}`
    async fn create_book(&self, draft: &BookDraft) -> ApiResult<Book>;

    /// `PUT books/{id}/` with the full draft body
    async fn update_book(&self, id: BookId, draft: &BookDraft) -> ApiResult<Book>;

    /// `DELETE books/{id}/`
    async fn delete_book(&self, id: BookId) -> ApiResult<()>;

    /// `GET s3-pdfs/`
    async fn list_documents(&self) -> ApiResult<Vec<DocumentRef>>;

    /// `GET recommend/{subject}/`
    async fn list_recommendations(&self, subject: &str) -> ApiResult<Vec<Book>>;
}

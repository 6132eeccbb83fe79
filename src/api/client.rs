//! HTTP client for the BookHive REST API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, BookApi, Endpoints};
use crate::models::{Book, BookDraft, BookId, DocumentRef};

/// `reqwest`-backed [`BookApi`].
///
/// No timeout or retry policy is applied: requests rely on the transport
/// defaults, and a failure is reported once.
#[derive(Debug, Clone)]
pub struct HttpBookApi {
    client: Client,
    endpoints: Endpoints,
}

impl HttpBookApi {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoints: Endpoints::new(base_url),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        decode(check_status(response).await?).await
    }
}

/// Turn non-2xx responses into [`ApiError::Status`] carrying the body text
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl BookApi for HttpBookApi {
    async fn list_books(&self) -> ApiResult<Vec<Book>> {
        self.get_json(&self.endpoints.books()).await
    }

    async fn create_book(&self, draft: &BookDraft) -> ApiResult<Book> {
        let url = self.endpoints.books();
        tracing::debug!(%url, "POST");

        // A stray id in a create draft must not reach the server
        let body = BookDraft {
            id: None,
            ..draft.clone()
        };
        let response = self.client.post(&url).json(&body).send().await?;
        decode(check_status(response).await?).await
    }

    async fn update_book(&self, id: BookId, draft: &BookDraft) -> ApiResult<Book> {
        let url = self.endpoints.book(id);
        tracing::debug!(%url, "PUT");

        let body = BookDraft {
            id: Some(id),
            ..draft.clone()
        };
        let response = self.client.put(&url).json(&body).send().await?;
        decode(check_status(response).await?).await
    }

    async fn delete_book(&self, id: BookId) -> ApiResult<()> {
        let url = self.endpoints.book(id);
        tracing::debug!(%url, "DELETE");

        let response = self.client.delete(&url).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn list_documents(&self) -> ApiResult<Vec<DocumentRef>> {
        self.get_json(&self.endpoints.documents()).await
    }

    async fn list_recommendations(&self, subject: &str) -> ApiResult<Vec<Book>> {
        self.get_json(&self.endpoints.recommendations(subject)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::stub::{body_of, serve_once};

    fn dune(id: Option<BookId>) -> BookDraft {
        BookDraft {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            id,
        }
    }

    #[test]
    fn test_client_uses_normalized_base() {
        let api = HttpBookApi::new("http://127.0.0.1:8000/api");
        assert_eq!(api.endpoints().books(), "http://127.0.0.1:8000/api/books/");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Port 9 (discard) on loopback is closed in test environments
        let api = HttpBookApi::new("http://127.0.0.1:9/api/");
        let err = api.list_books().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert!(!err.is_rejection());
    }

    #[tokio::test]
    async fn test_create_posts_without_id() {
        let (base, server) =
            serve_once("201 Created", r#"{"id":7,"title":"Dune","author":"Frank Herbert"}"#).await;
        let api = HttpBookApi::new(&format!("{}/api/", base));

        let created = api.create_book(&dune(Some(3))).await.unwrap();
        assert_eq!(created.id, 7);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/books/ HTTP/1.1"));
        let body: serde_json::Value = serde_json::from_str(body_of(&request)).unwrap();
        assert_eq!(body, serde_json::json!({"title": "Dune", "author": "Frank Herbert"}));
    }

    #[tokio::test]
    async fn test_update_puts_to_record_path() {
        let (base, server) =
            serve_once("200 OK", r#"{"id":3,"title":"Dune","author":"Frank Herbert"}"#).await;
        let api = HttpBookApi::new(&format!("{}/api/", base));

        let updated = api.update_book(3, &dune(None)).await.unwrap();
        assert_eq!(updated.title, "Dune");

        let request = server.await.unwrap();
        assert!(request.starts_with("PUT /api/books/3/ HTTP/1.1"));
        let body: serde_json::Value = serde_json::from_str(body_of(&request)).unwrap();
        assert_eq!(body["id"], 3);
    }

    #[tokio::test]
    async fn test_rejection_carries_status_and_body() {
        let (base, server) = serve_once("400 Bad Request", r#"{"title":["required"]}"#).await;
        let api = HttpBookApi::new(&format!("{}/api/", base));

        let err = api.create_book(&BookDraft::new()).await.unwrap_err();
        server.await.unwrap();

        match &err {
            ApiError::Status { status, message } => {
                assert_eq!(*status, 400);
                assert!(message.contains("required"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.is_rejection());
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let (base, server) = serve_once("200 OK", "<html>not json</html>").await;
        let api = HttpBookApi::new(&format!("{}/api/", base));

        let err = api.list_books().await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_delete_accepts_no_content() {
        let (base, server) = serve_once("204 No Content", "").await;
        let api = HttpBookApi::new(&format!("{}/api/", base));

        api.delete_book(5).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("DELETE /api/books/5/ HTTP/1.1"));
    }
}

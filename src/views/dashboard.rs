//! Dashboard
//!
//! Read-only overview of the catalog, the public PDFs and the
//! recommendations for one subject. The three collections are requested
//! concurrently and shown all-or-nothing: if any request fails, every
//! section renders empty.

use std::cell::RefCell;
use std::rc::Rc;

use futures_util::future::join3;

use super::{Lifecycle, Observers, Phase};
use crate::api::BookApi;
use crate::models::{Book, DocumentRef};

/// Dashboard sections
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub phase: Phase,
    pub books: Vec<Book>,
    pub documents: Vec<DocumentRef>,
    pub recommendations: Vec<Book>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            books: Vec::new(),
            documents: Vec::new(),
            recommendations: Vec::new(),
        }
    }
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Loaded with nothing to show in any section
    pub fn is_empty(&self) -> bool {
        self.books.is_empty() && self.documents.is_empty() && self.recommendations.is_empty()
    }
}

/// Loads [`DashboardState`] once per mount
#[derive(Clone)]
pub struct DashboardController {
    api: Rc<dyn BookApi>,
    subject: String,
    lifecycle: Lifecycle,
    state: Rc<RefCell<DashboardState>>,
    observers: Observers<DashboardState>,
}

impl DashboardController {
    pub fn new(api: Rc<dyn BookApi>, subject: impl Into<String>, lifecycle: Lifecycle) -> Self {
        Self {
            api,
            subject: subject.into(),
            lifecycle,
            state: Rc::new(RefCell::new(DashboardState::default())),
            observers: Observers::new(),
        }
    }

    pub fn state(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self, listener: impl Fn(&DashboardState) + 'static) {
        self.observers.subscribe(listener);
    }

    /// Fetch all three sections and wait for every request to settle
    pub async fn load(&self) {
        let (books, documents, recommendations) = join3(
            self.api.list_books(),
            self.api.list_documents(),
            self.api.list_recommendations(&self.subject),
        )
        .await;

        if !self.lifecycle.is_alive() {
            tracing::debug!("Dashboard unmounted, dropping fetch results");
            return;
        }

        let loaded = match (books, documents, recommendations) {
            (Ok(books), Ok(documents), Ok(recommendations)) => DashboardState {
                phase: Phase::Ready,
                books,
                documents,
                recommendations,
            },
            (books, documents, recommendations) => {
                for err in [books.err(), documents.err(), recommendations.err()]
                    .into_iter()
                    .flatten()
                {
                    tracing::error!("Data fetch error: {}", err);
                }
                DashboardState {
                    phase: Phase::Ready,
                    ..DashboardState::default()
                }
            }
        };

        *self.state.borrow_mut() = loaded.clone();
        self.observers.notify(&loaded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{book, Call, MockApi};
    use crate::api::ApiError;
    use std::cell::Cell;

    fn pdf(name: &str) -> DocumentRef {
        DocumentRef {
            name: name.to_string(),
            url: format!("https://bucket.example.com/{}", name),
        }
    }

    fn stocked() -> Rc<MockApi> {
        let api = MockApi::with_books(vec![book(1, "Dune", "Frank Herbert")]);
        api.set_documents(Ok(vec![pdf("intro.pdf"), pdf("guide.pdf")]));
        api.set_recommendations(Ok(vec![book(9, "Hyperion", "Dan Simmons")]));
        api
    }

    #[tokio::test]
    async fn test_loads_all_sections() {
        let api = stocked();
        let dashboard = DashboardController::new(api.clone(), "1", Lifecycle::new());
        assert!(dashboard.state().is_loading());

        dashboard.load().await;

        let state = dashboard.state();
        assert_eq!(state.phase, Phase::Ready);
        assert_eq!(state.books.len(), 1);
        assert_eq!(state.documents.len(), 2);
        assert_eq!(state.recommendations[0].title, "Hyperion");

        let calls = api.calls();
        assert_eq!(calls.len(), 3);
        assert!(calls.contains(&Call::ListBooks));
        assert!(calls.contains(&Call::ListDocuments));
        assert!(calls.contains(&Call::ListRecommendations("1".to_string())));
    }

    #[tokio::test]
    async fn test_any_failure_empties_every_section() {
        let api = stocked();
        api.set_recommendations(Err(ApiError::Status {
            status: 404,
            message: "no such subject".to_string(),
        }));
        let dashboard = DashboardController::new(api.clone(), "1", Lifecycle::new());

        dashboard.load().await;

        let state = dashboard.state();
        assert_eq!(state.phase, Phase::Ready);
        assert!(state.is_empty());
    }

    #[tokio::test]
    async fn test_book_failure_alone_empties_dashboard() {
        let api = stocked();
        api.fail_list();
        let dashboard = DashboardController::new(api.clone(), "1", Lifecycle::new());

        dashboard.load().await;

        assert!(dashboard.state().is_empty());
        assert!(!dashboard.state().is_loading());
    }

    #[tokio::test]
    async fn test_configured_subject_is_requested() {
        let api = stocked();
        let dashboard = DashboardController::new(api.clone(), "42", Lifecycle::new());

        dashboard.load().await;

        assert_eq!(api.count(&Call::ListRecommendations("42".to_string())), 1);
    }

    #[tokio::test]
    async fn test_unmounted_dashboard_ignores_results() {
        let api = stocked();
        let lifecycle = Lifecycle::new();
        let dashboard = DashboardController::new(api.clone(), "1", lifecycle.clone());

        let notified = Rc::new(Cell::new(false));
        let seen = notified.clone();
        dashboard.subscribe(move |_| seen.set(true));

        lifecycle.end();
        dashboard.load().await;

        assert!(dashboard.state().is_loading());
        assert!(!notified.get());
    }

    #[tokio::test]
    async fn test_document_failure_empties_every_section() {
        let api = stocked();
        api.set_documents(Err(ApiError::Network("bucket unreachable".to_string())));
        let dashboard = DashboardController::new(api.clone(), "1", Lifecycle::new());

        dashboard.load().await;

        let state = dashboard.state();
        assert_eq!(state.phase, Phase::Ready);
        assert!(state.is_empty());
        assert_eq!(api.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_unmount_while_loading_drops_results() {
        let api = stocked();
        let lifecycle = Lifecycle::new();
        let dashboard = DashboardController::new(api.clone(), "1", lifecycle.clone());

        let notified = Rc::new(Cell::new(false));
        let seen = notified.clone();
        dashboard.subscribe(move |_| seen.set(true));

        // Hold the book request until the page has gone away
        let gate = api.gate();
        tokio::join!(dashboard.load(), async {
            lifecycle.end();
            gate.notify_one();
        });

        assert_eq!(api.calls().len(), 3);
        assert!(dashboard.state().is_loading());
        assert!(!notified.get());
    }
}

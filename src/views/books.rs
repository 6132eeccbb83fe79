//! Book List
//!
//! Lists the catalog and owns the create/edit dialog and the notification
//! banner. Mutations never patch the local list: every successful save or
//! delete is followed by exactly one re-fetch of the whole collection.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{Lifecycle, Observers, Phase};
use crate::api::BookApi;
use crate::models::{Book, BookDraft, BookId, DraftField, Severity};
use crate::notify::Notifier;
use crate::session::SessionContext;

pub const SAVE_SUCCESS: &str = "Book saved successfully";
pub const SAVE_FAILURE: &str = "Error saving book";
pub const DELETE_SUCCESS: &str = "Book deleted";
pub const DELETE_FAILURE: &str = "Error deleting book";

/// Everything the book list page renders
#[derive(Debug, Clone, PartialEq)]
pub struct BookListState {
    pub phase: Phase,
    /// Result of the last successful fetch
    pub books: Vec<Book>,
    /// Open dialog and its draft; `None` when the dialog is closed
    pub dialog: Option<BookDraft>,
    pub notifier: Notifier,
}

impl Default for BookListState {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            books: Vec::new(),
            dialog: None,
            notifier: Notifier::new(),
        }
    }
}

impl BookListState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    /// Dialog heading for the current draft
    pub fn dialog_title(&self) -> &'static str {
        match &self.dialog {
            Some(draft) if !draft.is_new() => "Edit Book",
            _ => "Add New Book",
        }
    }

    /// One card per listed book
    pub fn cards(&self, authenticated: bool) -> Vec<BookCard> {
        self.books
            .iter()
            .map(|book| BookCard {
                id: book.id,
                title: book.title.clone(),
                byline: format!("by {}", book.author),
                show_controls: authenticated,
            })
            .collect()
    }
}

/// Render model of a single book card
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookCard {
    pub id: BookId,
    pub title: String,
    pub byline: String,
    /// Edit and Delete buttons
    pub show_controls: bool,
}

/// Drives [`BookListState`] against the API.
///
/// Clones share state, so the UI can move a clone into each event handler.
#[derive(Clone)]
pub struct BookListController {
    api: Rc<dyn BookApi>,
    session: SessionContext,
    lifecycle: Lifecycle,
    state: Rc<RefCell<BookListState>>,
    observers: Observers<BookListState>,
    saving: Rc<Cell<bool>>,
}

impl BookListController {
    pub fn new(api: Rc<dyn BookApi>, session: SessionContext, lifecycle: Lifecycle) -> Self {
        Self {
            api,
            session,
            lifecycle,
            state: Rc::new(RefCell::new(BookListState::default())),
            observers: Observers::new(),
            saving: Rc::new(Cell::new(false)),
        }
    }

    pub fn state(&self) -> BookListState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self, listener: impl Fn(&BookListState) + 'static) {
        self.observers.subscribe(listener);
    }

    /// Whether Add/Edit/Delete are offered
    pub fn controls_visible(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn cards(&self) -> Vec<BookCard> {
        self.state.borrow().cards(self.controls_visible())
    }

    /// Initial fetch when the page mounts
    pub async fn mount(&self) {
        self.update(|s| s.phase = Phase::Loading);
        self.refresh().await;
    }

    /// Replace the list with a fresh copy from the API.
    ///
    /// Failures are logged and leave the last successful list in place.
    pub async fn refresh(&self) {
        let result = self.api.list_books().await;
        if !self.lifecycle.is_alive() {
            tracing::debug!("Book list unmounted, dropping fetch result");
            return;
        }

        self.update(|s| {
            match result {
                Ok(books) => s.books = books,
                Err(e) => tracing::error!("Books error: {}", e),
            }
            s.phase = Phase::Ready;
        });
    }

    pub fn open_create(&self) {
        if !self.controls_visible() {
            return;
        }
        self.update(|s| s.dialog = Some(BookDraft::new()));
    }

    pub fn open_edit(&self, book: &Book) {
        if !self.controls_visible() {
            return;
        }
        self.update(|s| s.dialog = Some(BookDraft::from(book)));
    }

    pub fn edit_draft(&self, field: DraftField, value: String) {
        self.update(|s| {
            if let Some(draft) = s.dialog.as_mut() {
                draft.set(field, value);
            }
        });
    }

    /// Close the dialog and discard the draft
    pub fn cancel(&self) {
        self.update(|s| s.dialog = None);
    }

    /// Create or update the dialog's draft.
    ///
    /// A save issued while another is in flight is ignored.
    pub async fn save(&self) {
        if !self.controls_visible() || self.saving.get() {
            return;
        }
        let Some(draft) = self.state.borrow().dialog.clone() else {
            return;
        };

        self.saving.set(true);
        let result = match draft.id {
            Some(id) => self.api.update_book(id, &draft).await.map(|_| ()),
            None => self.api.create_book(&draft).await.map(|_| ()),
        };
        self.saving.set(false);

        if !self.lifecycle.is_alive() {
            tracing::debug!("Book list unmounted, dropping save result");
            return;
        }

        match result {
            Ok(()) => {
                tracing::info!(id = ?draft.id, title = %draft.title, "Book saved");
                self.update(|s| {
                    s.dialog = None;
                    s.notifier.show(SAVE_SUCCESS, Severity::Success);
                });
                self.refresh().await;
            }
            Err(e) => {
                tracing::warn!("Saving book failed: {}", e);
                self.update(|s| {
                    s.notifier.show(SAVE_FAILURE, Severity::Error);
                });
            }
        }
    }

    pub async fn delete(&self, id: BookId) {
        if !self.controls_visible() {
            return;
        }

        let result = self.api.delete_book(id).await;
        if !self.lifecycle.is_alive() {
            tracing::debug!("Book list unmounted, dropping delete result");
            return;
        }

        match result {
            Ok(()) => {
                tracing::info!(id, "Book deleted");
                self.update(|s| {
                    s.notifier.show(DELETE_SUCCESS, Severity::Info);
                });
                self.refresh().await;
            }
            Err(e) => {
                tracing::warn!(id, "Deleting book failed: {}", e);
                self.update(|s| {
                    s.notifier.show(DELETE_FAILURE, Severity::Error);
                });
            }
        }
    }

    /// Auto-dismiss callback; ignored if a newer notification replaced `id`
    pub fn dismiss_notification(&self, id: u64) {
        if !self.lifecycle.is_alive() {
            return;
        }
        self.update(|s| {
            s.notifier.dismiss(id);
        });
    }

    /// Explicit close by the user
    pub fn close_notification(&self) {
        self.update(|s| s.notifier.clear());
    }

    fn update(&self, f: impl FnOnce(&mut BookListState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            f(&mut state);
            state.clone()
        };
        self.observers.notify(&snapshot);
    }
}

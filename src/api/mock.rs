//! Scripted [`BookApi`] double for controller tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::Notify;

use super::{ApiError, ApiResult, BookApi};
use crate::models::{Book, BookDraft, BookId, DocumentRef};

/// A request observed by [`MockApi`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListBooks,
    Create(BookDraft),
    Update(BookId, BookDraft),
    Delete(BookId),
    ListDocuments,
    ListRecommendations(String),
}

/// Records every call and answers from queued responses.
///
/// `list_books` answers with the queued lists in order, repeating the last
/// one; mutation results default to success.
#[derive(Default)]
pub struct MockApi {
    calls: RefCell<Vec<Call>>,
    book_lists: RefCell<VecDeque<ApiResult<Vec<Book>>>>,
    last_books: RefCell<Vec<Book>>,
    fail_list: Cell<bool>,
    fail_save: Cell<bool>,
    fail_delete: Cell<bool>,
    documents: RefCell<Option<ApiResult<Vec<DocumentRef>>>>,
    recommendations: RefCell<Option<ApiResult<Vec<Book>>>>,
    gate: RefCell<Option<Rc<Notify>>>,
}

pub fn book(id: BookId, title: &str, author: &str) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
    }
}

fn failure() -> ApiError {
    ApiError::Status {
        status: 500,
        message: "server error".to_string(),
    }
}

impl MockApi {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_books(books: Vec<Book>) -> Rc<Self> {
        let api = Self::new();
        api.push_books(books);
        api
    }

    pub fn push_books(&self, books: Vec<Book>) {
        self.book_lists.borrow_mut().push_back(Ok(books));
    }

    pub fn fail_list(&self) {
        self.fail_list.set(true);
    }

    pub fn fail_save(&self) {
        self.fail_save.set(true);
    }

    pub fn fail_delete(&self) {
        self.fail_delete.set(true);
    }

    pub fn set_documents(&self, result: ApiResult<Vec<DocumentRef>>) {
        *self.documents.borrow_mut() = Some(result);
    }

    pub fn set_recommendations(&self, result: ApiResult<Vec<Book>>) {
        *self.recommendations.borrow_mut() = Some(result);
    }

    /// Hold the next request until the returned `Notify` fires
    pub fn gate(&self) -> Rc<Notify> {
        let notify = Rc::new(Notify::new());
        *self.gate.borrow_mut() = Some(notify.clone());
        notify
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    async fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }
}

#[async_trait(?Send)]
impl BookApi for MockApi {
    async fn list_books(&self) -> ApiResult<Vec<Book>> {
        self.record(Call::ListBooks).await;
        if self.fail_list.get() {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        match self.book_lists.borrow_mut().pop_front() {
            Some(Ok(books)) => {
                *self.last_books.borrow_mut() = books.clone();
                Ok(books)
            }
            Some(Err(e)) => Err(e),
            None => Ok(self.last_books.borrow().clone()),
        }
    }

    async fn create_book(&self, draft: &BookDraft) -> ApiResult<Book> {
        self.record(Call::Create(draft.clone())).await;
        if self.fail_save.get() {
            return Err(failure());
        }
        Ok(book(100, &draft.title, &draft.author))
    }

    async fn update_book(&self, id: BookId, draft: &BookDraft) -> ApiResult<Book> {
        self.record(Call::Update(id, draft.clone())).await;
        if self.fail_save.get() {
            return Err(failure());
        }
        Ok(book(id, &draft.title, &draft.author))
    }

    async fn delete_book(&self, id: BookId) -> ApiResult<()> {
        self.record(Call::Delete(id)).await;
        if self.fail_delete.get() {
            return Err(failure());
        }
        Ok(())
    }

    async fn list_documents(&self) -> ApiResult<Vec<DocumentRef>> {
        self.record(Call::ListDocuments).await;
        self.documents.borrow_mut().take().unwrap_or(Ok(Vec::new()))
    }

    async fn list_recommendations(&self, subject: &str) -> ApiResult<Vec<Book>> {
        self.record(Call::ListRecommendations(subject.to_string())).await;
        self.recommendations.borrow_mut().take().unwrap_or(Ok(Vec::new()))
    }
}

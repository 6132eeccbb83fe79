//! # BookHive
//!
//! Client core of the BookHive book catalog front-end: the REST client,
//! the session context shared by every page, and the controllers behind
//! the book list, dashboard and profile pages.
//!
//! ## Modules
//!
//! - [`api`]: `BookApi` trait and its `reqwest` implementation
//! - [`session`]: session snapshot and the identity provider seam
//! - [`identity`]: hosted login via browser redirects
//! - [`views`]: page controllers with liveness-guarded async updates
//! - [`routes`]: path to page mapping
//! - [`config`]: TOML configuration with key/value overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use bookhive::{BookListController, Config, HttpBookApi, Lifecycle, Session, SessionContext};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = Config::default();
//!     let api = Rc::new(HttpBookApi::new(&config.api.base_url));
//!     let session = SessionContext::fixed(Session::anonymous());
//!
//!     let books = BookListController::new(api, session, Lifecycle::new());
//!     books.mount().await;
//!
//!     for card in books.cards() {
//!         println!("{} {}", card.title, card.byline);
//!     }
//! }
//! ```

pub mod api;
pub mod config;
pub mod identity;
pub mod models;
pub mod notify;
pub mod routes;
pub mod session;
pub mod views;

#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

pub use api::{ApiError, ApiResult, BookApi, Endpoints, HttpBookApi};
pub use config::{Config, ConfigError};
pub use identity::{BrowserEnv, RedirectIdentity};
pub use models::{Book, BookDraft, BookId, DocumentRef, DraftField, Severity, UserProfile};
pub use notify::{Notification, Notifier, DEFAULT_NOTIFICATION_TIMEOUT_MS};
pub use routes::Route;
pub use session::{IdentityProvider, Session, SessionContext, SessionError, StaticIdentity};
pub use views::{
    BookCard, BookListController, BookListState, DashboardController, DashboardState, Lifecycle,
    Phase, ProfileView, Welcome,
};

#[cfg(not(target_arch = "wasm32"))]
pub use logging::init_logging;

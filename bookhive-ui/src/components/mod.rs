//! UI Components
//!
//! Reusable Leptos components for the pages.

pub mod book_card;
pub mod book_dialog;
pub mod loading;
pub mod nav;
pub mod section;
pub mod toast;

pub use book_card::{BookCardView, CatalogCard, DocumentCard, RecommendationCard};
pub use book_dialog::BookDialog;
pub use loading::Loading;
pub use nav::Nav;
pub use section::Section;
pub use toast::Toast;

//! Pages
//!
//! Top-level page components for each route.

pub mod books;
pub mod dashboard;
pub mod profile;
pub mod welcome;

pub use books::BooksPage;
pub use dashboard::DashboardPage;
pub use profile::ProfilePage;
pub use welcome::WelcomePage;

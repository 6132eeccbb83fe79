//! State Management
//!
//! Reactive bridges between the `bookhive` core and Leptos signals.

pub mod services;
pub mod session;

pub use services::AppServices;
pub use session::SessionState;

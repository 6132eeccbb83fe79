//! Profile
//!
//! Pure projection of the session; no network access.

use crate::session::Session;

pub const LOGIN_REQUIRED: &str = "Please login to view your profile.";

/// What the profile page shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileView {
    /// Shown to anonymous visitors
    Gate { message: &'static str },
    Card {
        name: String,
        email: String,
        picture: String,
    },
}

impl ProfileView {
    pub fn from_session(session: &Session) -> Self {
        match (&session.user, session.is_authenticated) {
            (Some(user), true) => ProfileView::Card {
                name: user.name.clone(),
                email: user.email.clone(),
                picture: user.picture.clone(),
            },
            _ => ProfileView::Gate {
                message: LOGIN_REQUIRED,
            },
        }
    }
}

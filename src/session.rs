//! Session Context
//!
//! The authenticated-identity state shared by every view. It is passed
//! explicitly into each view rather than looked up globally; clones share
//! the same snapshot and subscribers.

use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

use crate::api::ApiError;
use crate::models::UserProfile;
use crate::views::Observers;

/// Snapshot of the current identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub is_authenticated: bool,
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: UserProfile) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
        }
    }
}

/// Session and identity provider errors
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Identity provider is not configured")]
    NotConfigured,

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Identity provider returned an error: {error}")]
    Provider {
        error: String,
        description: Option<String>,
    },

    #[error("Login callback state does not match the pending login")]
    StateMismatch,

    #[error("Failed to fetch user profile: {0}")]
    UserInfo(#[from] ApiError),
}

/// External identity provider capability
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Resolve the session at startup, consuming a login callback if present
    async fn restore(&self) -> Result<Session, SessionError>;

    /// Leave the app for the provider's login page
    fn login(&self) -> Result<(), SessionError>;

    /// End the provider session and return to the app
    fn logout(&self) -> Result<(), SessionError>;
}

/// Provider with a preset session and no login round trip.
///
/// Used when no identity tenant is configured, and by tests.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    session: Session,
}

impl StaticIdentity {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

#[async_trait(?Send)]
impl IdentityProvider for StaticIdentity {
    async fn restore(&self) -> Result<Session, SessionError> {
        Ok(self.session.clone())
    }

    fn login(&self) -> Result<(), SessionError> {
        Err(SessionError::NotConfigured)
    }

    fn logout(&self) -> Result<(), SessionError> {
        Ok(())
    }
}

/// Shared session handle injected into views
#[derive(Clone)]
pub struct SessionContext {
    provider: Rc<dyn IdentityProvider>,
    current: Rc<RefCell<Session>>,
    observers: Observers<Session>,
}

impl SessionContext {
    /// Anonymous until [`SessionContext::initialize`] resolves
    pub fn new(provider: Rc<dyn IdentityProvider>) -> Self {
        Self {
            provider,
            current: Rc::new(RefCell::new(Session::anonymous())),
            observers: Observers::new(),
        }
    }

    /// Context fixed to `session`, without a provider round trip
    pub fn fixed(session: Session) -> Self {
        let ctx = Self::new(Rc::new(StaticIdentity::new(session.clone())));
        *ctx.current.borrow_mut() = session;
        ctx
    }

    /// Ask the provider for the startup session.
    ///
    /// Provider failures leave the session anonymous; they are logged only.
    pub async fn initialize(&self) {
        match self.provider.restore().await {
            Ok(session) => {
                tracing::info!(authenticated = session.is_authenticated, "Session restored");
                self.replace(session);
            }
            Err(e) => {
                tracing::warn!("Session restore failed: {}", e);
                self.replace(Session::anonymous());
            }
        }
    }

    pub fn snapshot(&self) -> Session {
        self.current.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_authenticated
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.current.borrow().user.clone()
    }

    pub fn login(&self) {
        if let Err(e) = self.provider.login() {
            tracing::error!("Login failed: {}", e);
        }
    }

    /// Clear the local session, then hand over to the provider
    pub fn logout(&self) {
        self.replace(Session::anonymous());
        if let Err(e) = self.provider.logout() {
            tracing::error!("Logout failed: {}", e);
        }
    }

    /// Called with the new snapshot after every change
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) {
        self.observers.subscribe(listener);
    }

    fn replace(&self, session: Session) {
        *self.current.borrow_mut() = session.clone();
        self.observers.notify(&session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn ada() -> UserProfile {
        UserProfile {
            sub: Some("auth0|ada".to_string()),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            picture: "https://example.com/ada.png".to_string(),
        }
    }

    struct FailingProvider {
        logouts: Cell<u32>,
    }

    #[async_trait(?Send)]
    impl IdentityProvider for FailingProvider {
        async fn restore(&self) -> Result<Session, SessionError> {
            Err(SessionError::StateMismatch)
        }

        fn login(&self) -> Result<(), SessionError> {
            Err(SessionError::Navigation("blocked".to_string()))
        }

        fn logout(&self) -> Result<(), SessionError> {
            self.logouts.set(self.logouts.get() + 1);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_initialize_from_provider() {
        let ctx = SessionContext::new(Rc::new(StaticIdentity::new(Session::signed_in(ada()))));
        assert!(!ctx.is_authenticated());

        ctx.initialize().await;
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.user().unwrap().email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_restore_failure_is_anonymous() {
        let provider = Rc::new(FailingProvider { logouts: Cell::new(0) });
        let ctx = SessionContext::new(provider);

        ctx.initialize().await;
        assert_eq!(ctx.snapshot(), Session::anonymous());

        // Login errors are swallowed
        ctx.login();
        assert!(!ctx.is_authenticated());
    }

    #[test]
    fn test_logout_clears_and_notifies() {
        let provider = Rc::new(FailingProvider { logouts: Cell::new(0) });
        let ctx = SessionContext::new(provider.clone());
        ctx.replace(Session::signed_in(ada()));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        ctx.subscribe(move |s| sink.borrow_mut().push(s.is_authenticated));

        let view_copy = ctx.clone();
        ctx.logout();

        assert!(!view_copy.is_authenticated());
        assert!(view_copy.user().is_none());
        assert_eq!(*seen.borrow(), vec![false]);
        assert_eq!(provider.logouts.get(), 1);
    }

    #[test]
    fn test_fixed_context() {
        let ctx = SessionContext::fixed(Session::signed_in(ada()));
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.user().unwrap().name, "Ada Lovelace");
    }
}

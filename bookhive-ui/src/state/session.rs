//! Session signal.

use leptos::*;

use bookhive::{Session, SessionContext, UserProfile};

/// [`SessionContext`] plus a signal tracking its snapshot
#[derive(Clone)]
pub struct SessionState {
    context: SessionContext,
    snapshot: RwSignal<Session>,
}

impl SessionState {
    pub fn new(context: SessionContext) -> Self {
        let snapshot = create_rw_signal(context.snapshot());
        context.subscribe(move |session| snapshot.set(session.clone()));
        Self { context, snapshot }
    }

    /// The plain context, for controllers
    pub fn context(&self) -> SessionContext {
        self.context.clone()
    }

    pub fn session(&self) -> Signal<Session> {
        self.snapshot.into()
    }

    pub fn is_authenticated(&self) -> Signal<bool> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.is_authenticated))
    }

    pub fn user(&self) -> Signal<Option<UserProfile>> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.user.clone()))
    }

    pub fn login(&self) {
        self.context.login();
    }

    pub fn logout(&self) {
        self.context.logout();
    }
}

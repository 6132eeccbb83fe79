//! Toast Notification Component
//!
//! Shows the page's single notification and arms its auto-dismiss timer.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::*;

use bookhive::{Notification, Severity};

/// Notification banner.
///
/// `on_dismiss` receives the id the timer was armed for, so a notification
/// that replaced it in the meantime stays visible.
#[component]
pub fn Toast(
    #[prop(into)]
    notification: Signal<Option<Notification>>,
    timeout_ms: u32,
    on_dismiss: Callback<u64>,
    on_close: Callback<()>,
) -> impl IntoView {
    let timer = DismissTimer::default();

    let armed = timer.clone();
    create_effect(move |_| match notification.with(|n| n.as_ref().map(|n| n.id)) {
        Some(id) => {
            let dismiss = on_dismiss.clone();
            armed.arm(timeout_ms, move || dismiss.call(id));
        }
        None => armed.cancel(),
    });

    // Page callbacks must not run once the page is disposed
    on_cleanup(move || timer.cancel());

    view! {
        <div class="fixed bottom-6 left-1/2 -translate-x-1/2 z-50">
            {move || notification.get().map(|n| {
                let (icon, bg_class) = style(n.severity);
                let close = on_close.clone();
                view! {
                    <div class=format!(
                        "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                         transform transition-all duration-300 ease-out",
                        bg_class
                    )>
                        <span class="text-lg">{icon}</span>
                        <span class="text-sm font-medium">{n.message}</span>
                        <button
                            class="ml-2 text-white/80 hover:text-white"
                            aria-label="Close"
                            on:click=move |_| close.call(())
                        >
                            "✕"
                        </button>
                    </div>
                }
            })}
        </div>
    }
}

fn style(severity: Severity) -> (&'static str, &'static str) {
    match severity {
        Severity::Success => ("✓", "bg-green-600"),
        Severity::Info => ("ℹ", "bg-blue-600"),
        Severity::Warning => ("⚠", "bg-yellow-600"),
        Severity::Error => ("✕", "bg-red-600"),
    }
}

/// Holds at most one pending auto-dismiss.
///
/// Arming replaces (and so cancels) the previous timer.
#[derive(Clone, Default)]
pub(crate) struct DismissTimer(Rc<RefCell<Option<Timeout>>>);

impl DismissTimer {
    pub(crate) fn arm(&self, timeout_ms: u32, callback: impl FnOnce() + 'static) {
        *self.0.borrow_mut() = Some(Timeout::new(timeout_ms, callback));
    }

    pub(crate) fn cancel(&self) {
        // Dropping a gloo `Timeout` clears it
        self.0.borrow_mut().take();
    }

    #[cfg(test)]
    pub(crate) fn is_armed(&self) -> bool {
        self.0.borrow().is_some()
    }
}

//! View Controllers
//!
//! Framework-independent state and actions for each page. The front-end
//! renders controller state and forwards user actions; everything that
//! talks to the network lives here.

pub mod books;
pub mod dashboard;
pub mod profile;
pub mod welcome;

pub use books::{BookCard, BookListController, BookListState};
pub use dashboard::{DashboardController, DashboardState};
pub use profile::ProfileView;
pub use welcome::Welcome;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Liveness of a mounted view.
///
/// Async work started by a view checks this after every await and drops
/// its result once the view has been unmounted.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    alive: Rc<Cell<bool>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Mark the view as unmounted
    pub fn end(&self) {
        self.alive.set(false);
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Load phase shared by the data-backed views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

type Listener<S> = Rc<dyn Fn(&S)>;

/// Change subscribers for a piece of view state
pub struct Observers<S> {
    listeners: Rc<RefCell<Vec<Listener<S>>>>,
}

impl<S> Observers<S> {
    pub fn new() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&S) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn notify(&self, state: &S) {
        // Listeners may subscribe again while being called
        let listeners: Vec<Listener<S>> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(state);
        }
    }
}

impl<S> Clone for Observers<S> {
    fn clone(&self) -> Self {
        Self {
            listeners: self.listeners.clone(),
        }
    }
}

impl<S> Default for Observers<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_shared_between_clones() {
        let lifecycle = Lifecycle::new();
        let handle = lifecycle.clone();
        assert!(handle.is_alive());

        lifecycle.end();
        assert!(!handle.is_alive());
    }

    #[test]
    fn test_observers_receive_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let observers = Observers::<u32>::new();

        let sink = seen.clone();
        observers.subscribe(move |v| sink.borrow_mut().push(*v));
        observers.notify(&1);
        observers.clone().notify(&2);

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }
}

//! Shared services handed to each page.

use std::rc::Rc;

use bookhive::{BookApi, Config};

/// REST client and configuration, passed to pages as a prop
#[derive(Clone)]
pub struct AppServices {
    pub api: Rc<dyn BookApi>,
    pub config: Rc<Config>,
}

impl AppServices {
    pub fn new(api: Rc<dyn BookApi>, config: Config) -> Self {
        Self {
            api,
            config: Rc::new(config),
        }
    }

    pub fn notification_timeout_ms(&self) -> u32 {
        self.config.ui.notification_timeout_ms
    }
}

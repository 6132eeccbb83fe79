//! BookHive
//!
//! Book catalog front-end built with Leptos (WASM).
//!
//! # Features
//!
//! - Book list with create, edit and delete for signed-in users
//! - Dashboard with the catalog, public PDFs and recommendations
//! - Hosted login through the identity provider's redirect flow
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Network access and page state live in the `bookhive`
//! crate's controllers; components here render their state.

use leptos::*;

mod app;
mod browser;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let (config, warnings) = browser::load_config();

    let level = config
        .logging
        .level
        .parse()
        .unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);
    for warning in warnings {
        log::warn!("{}", warning);
    }

    mount_to_body(move || view! { <app::App config=config /> });
}

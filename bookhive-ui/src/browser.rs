//! Browser Glue
//!
//! `window` access for configuration overrides and the login redirect flow.

use bookhive::identity::parse_callback;
use bookhive::{BrowserEnv, Config, SessionError};
use wasm_bindgen::JsValue;

/// Build-time configuration, overridable through `localStorage`
const EMBEDDED_CONFIG: &str = include_str!("../bookhive.toml");

/// Load the embedded config and apply `localStorage` overrides.
///
/// Problems are returned as messages because logging is configured from
/// the result.
pub fn load_config() -> (Config, Vec<String>) {
    let mut warnings = Vec::new();

    let embedded = match Config::from_toml_str(EMBEDDED_CONFIG).and_then(|c| {
        c.validate()?;
        Ok(c)
    }) {
        Ok(config) => config,
        Err(e) => {
            warnings.push(format!("Embedded config rejected, using defaults: {}", e));
            Config::default()
        }
    };

    let mut config = embedded.clone();
    config.apply_overrides(local_storage_item);

    if let Err(e) = config.validate() {
        warnings.push(format!("Ignoring invalid config overrides: {}", e));
        config = embedded;
    }

    (config, warnings)
}

fn local_storage_item(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

/// [`BrowserEnv`] backed by the page's `window`
#[derive(Debug, Clone, Copy, Default)]
pub struct WebEnv;

impl BrowserEnv for WebEnv {
    fn origin(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }

    fn redirect(&self, url: &str) -> Result<(), SessionError> {
        let window = web_sys::window()
            .ok_or_else(|| SessionError::Navigation("no window".to_string()))?;
        window
            .location()
            .set_href(url)
            .map_err(|e| SessionError::Navigation(format!("{:?}", e)))
    }

    fn take_fragment(&self) -> Option<String> {
        let window = web_sys::window()?;
        let location = window.location();
        let hash = location.hash().ok()?;
        let fragment = hash.trim_start_matches('#');
        if fragment.is_empty() {
            return None;
        }

        // Ordinary in-page anchors stay in the address bar
        if parse_callback(fragment).is_none() {
            return Some(fragment.to_string());
        }

        // Drop the token from the address bar without reloading
        let path = format!(
            "{}{}",
            location.pathname().unwrap_or_default(),
            location.search().unwrap_or_default()
        );
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&path));
        }

        Some(fragment.to_string())
    }

    fn stash(&self, key: &str, value: &str) {
        if let Some(storage) = session_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn take_stashed(&self, key: &str) -> Option<String> {
        let storage = session_storage()?;
        let value = storage.get_item(key).ok()??;
        let _ = storage.remove_item(key);
        Some(value)
    }

    fn random_token(&self) -> String {
        let mut bytes = [0u8; 16];
        let filled = web_sys::window()
            .and_then(|w| w.crypto().ok())
            .map(|crypto| crypto.get_random_values_with_u8_array(&mut bytes).is_ok())
            .unwrap_or(false);

        if !filled {
            for byte in bytes.iter_mut() {
                *byte = (js_sys::Math::random() * 256.0) as u8;
            }
        }

        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

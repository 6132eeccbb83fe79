//! Native log output.
//!
//! The library only emits `tracing` events. In the browser they reach the
//! console through the `log` bridge; native hosts install a subscriber here.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a formatted subscriber filtered by `RUST_LOG`, or `level` for
/// this crate when unset. Safe to call more than once.
pub fn init_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("bookhive={}", level)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging("debug");
        init_logging("info");
        tracing::info!("logging initialized twice without panicking");
    }
}

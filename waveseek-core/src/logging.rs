//! Tracing setup for hosts that don't bring their own subscriber

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset, blank or unparsable
pub const DEFAULT_FILTER: &str = "waveseek_core=debug";

static TRACING_INIT: Once = Once::new();

/// Install a stderr `fmt` subscriber. Later calls are no-ops.
///
/// `RUST_LOG` decides what is shown; without it, [`DEFAULT_FILTER`] makes
/// the per-change diagnostic line visible.
pub fn init() {
    TRACING_INIT.call_once(|| {
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

        let installed = tracing_subscriber::fmt()
            .with_target(false)
            .with_env_filter(env_filter(rust_log.as_deref()))
            .with_writer(std::io::stderr)
            .try_init();

        if installed.is_err() {
            tracing::debug!("Global subscriber already set, keeping it");
        }
    });
}

fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

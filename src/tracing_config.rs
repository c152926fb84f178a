//! Tracing configuration.
//!
//! Two output formats controlled by `DTSJ_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `json`: One JSON object per span/event — machine-readable
//!
//! ```bash
//! DTSJ_LOG=debug dtsj types/main.d.ts
//! DTSJ_LOG="dtsj_json=trace" DTSJ_LOG_FORMAT=json dtsj types/main.d.ts
//! ```
//!
//! The subscriber is only initialised when `DTSJ_LOG` (or `RUST_LOG`) is
//! set, so there is zero overhead in normal runs.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    fn from_env() -> Self {
        match std::env::var("DTSJ_LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Build an `EnvFilter` from `DTSJ_LOG`, falling back to `RUST_LOG`.
///
/// `DTSJ_LOG` takes precedence when both are set; values use `RUST_LOG`
/// syntax (e.g. `debug`, `dtsj_json=trace`).
fn build_filter() -> EnvFilter {
    if let Ok(value) = std::env::var("DTSJ_LOG") {
        EnvFilter::builder().parse_lossy(value)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `DTSJ_LOG` nor `RUST_LOG` is set. All output
/// goes to stderr so it never interferes with converted JSON on stdout.
pub fn init_tracing() {
    let has_dtsj_log = std::env::var("DTSJ_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_dtsj_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Text => {
            Registry::default()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Json => {
            Registry::default()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
    }
}

//! Structured logging for embedding applications.
//!
//! The library itself only emits `tracing` events:
//! - `info` when a model is loaded or a registry is built
//! - `warn` when a patient record is rejected
//! - `debug` per scored class, `trace` per evidence term
//!
//! Applications that do not bring their own subscriber can call
//! [`init_logging`] once at startup. Output always goes to stderr, either
//! human-readable or as JSON lines.

pub mod config;

pub use config::{LogConfig, LogFormat, LogLevel};

use std::io::IsTerminal;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Crates whose events the default filter lets through.
const LOG_TARGETS: &[&str] = &["tm_core", "tm_config"];

/// Build the env filter for a config.
///
/// RUST_LOG directives are used verbatim only when no level was set through
/// TM_LOG or an explicit override.
pub fn build_filter(config: &LogConfig) -> EnvFilter {
    if !config.explicit_level {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
    }
    let directives: Vec<String> = LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, config.level))
        .collect();
    EnvFilter::new(directives.join(","))
}

/// Install the global subscriber.
///
/// Returns false if a global subscriber was already installed (for example
/// by the host application or an earlier call); the existing one is kept.
pub fn init_logging(config: &LogConfig) -> bool {
    let filter = build_filter(config);

    match config.format {
        LogFormat::Human => {
            let use_ansi = std::io::stderr().is_terminal();
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(use_ansi);

            if config.timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt_layer)
                    .try_init()
                    .is_ok()
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt_layer.without_time())
                    .try_init()
                    .is_ok()
            }
        }
        LogFormat::Jsonl => {
            let json_layer = fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(json_layer)
                .try_init()
                .is_ok()
        }
    }
}

/// Initialize logging from the environment with no overrides.
pub fn init_default_logging() -> bool {
    init_logging(&LogConfig::from_env(None, None))
}

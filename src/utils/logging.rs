//! Logging utilities
//!
//! The logging side-channel used by the adapter, plus subscriber setup for applications

use crate::config::settings::LoggingConfig;
use anyhow::{Context, Result};
use std::fmt::Debug;

/// Longest response body echoed into a log line
pub const MAX_LOGGED_BODY_LEN: usize = 500;

/// Logging capability injected into the adapter
///
/// Implementations must not panic; a failing logger must never affect a request.
pub trait RequestLogger: Debug + Send + Sync {
    /// Routine request tracing
    fn debug(&self, message: &str);

    /// Failed requests
    fn error(&self, message: &str);
}

/// Default logger, forwards to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl RequestLogger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "ollama_client", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "ollama_client", "{}", message);
    }
}

/// Truncate a string with a note about original length
pub fn truncate_content(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... ({} chars truncated)", &s[..end], s.len() - end)
}

/// Install a global `tracing` subscriber
///
/// Libraries never call this on their own; it is offered to applications
/// that have no subscriber of their own.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if config.format == "json" {
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .finish(),
        )
    } else {
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    };

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    tracing::info!("Logging system initialized");
    Ok(())
}

//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use tracing_subscriber::EnvFilter;

/// Initialize the logger from config defaults
pub fn init_logger() {
    init_logger_with(None, false);
}

/// Initialize the logger
///
/// `RUST_LOG` wins over `log_level`. The access log target stays at `info`
/// unless the filter says otherwise. Calling twice is a no-op.
pub fn init_logger_with(log_level: Option<&str>, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(log_level.unwrap_or("info"))));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false);

    let result = if json {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.with_target(false).try_init()
    };

    if result.is_err() {
        tracing::debug!("Logger already initialized");
    }
}

fn default_directives(level: &str) -> String {
    format!("{level},http_access=info")
}

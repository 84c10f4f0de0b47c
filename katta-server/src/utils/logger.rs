//! Logging Infrastructure
//!
//! Structured logging setup: console output in development, optional
//! daily-rolled file output when a log directory exists.

use std::path::Path;

/// Initialize the logger with console output only
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// Falls back to console output when the directory does not exist.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&Path>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        if dir.exists()
            && let Some(dir_str) = dir.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "katta-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}

//! Logging Infrastructure
//!
//! Structured logging to stdout, or to a daily rolling file when a log
//! directory is configured.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level`. A `log_dir` that does not
/// exist is ignored and logs go to stdout.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists() {
            let file_appender = tracing_appender::rolling::daily(log_path, "employee-server");
            // Ignore the error if a subscriber is already installed (tests)
            let _ = subscriber.with_ansi(false).with_writer(file_appender).try_init();
            return;
        }
    }

    let _ = subscriber.try_init();
}

//! Logging Infrastructure
//!
//! `tracing` subscriber setup: plain or JSON lines, to stdout or to a daily
//! rolling file.

use std::path::Path;

/// Initialize the logger at `info`, stdout only
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger with optional JSON output and file output
///
/// File output is used only when `log_dir` exists. Calling this again after
/// a subscriber is installed is a no-op.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level
        .and_then(|l| l.parse().ok())
        .unwrap_or(tracing::Level::INFO);

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = log_dir
        .map(Path::new)
        .filter(|path| path.is_dir())
        .map(|path| tracing_appender::rolling::daily(path, "freight-pricing"));

    let installed = match (json, file_appender) {
        (true, Some(writer)) => subscriber.json().with_writer(writer).try_init(),
        (true, None) => subscriber.json().try_init(),
        (false, Some(writer)) => subscriber.with_ansi(false).with_writer(writer).try_init(),
        (false, None) => subscriber.try_init(),
    };

    if installed.is_err() {
        tracing::debug!("Logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        init_logger();
        init_logger_with_file(Some("debug"), true, None);
        tracing::info!("still logging");
    }

    #[test]
    fn test_missing_log_dir_falls_back_to_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        init_logger_with_file(Some("warn"), false, missing.to_str());
        assert!(!missing.exists());
    }
}

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::EnvFilter;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DEFAULT_FILTER: &str = "info";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Colored output on stdout.
    Console,
    /// Plain lines appended to the file, created if missing.
    File(PathBuf),
}

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("cannot open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("a global logger is already installed")]
    AlreadyInitialized,
}

/// UTC timestamps in [`TIMESTAMP_FORMAT`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoTimestamp;

impl FormatTime for ChronoTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "[{}]", Utc::now().format(TIMESTAMP_FORMAT))
    }
}

/// Builds the level filter for every subscriber.
///
/// # Returns
/// The filter from `RUST_LOG`, or one that passes `info` and above when the
/// variable is unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn console_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_timer(ChronoTimestamp)
        .with_ansi(true)
        .with_target(false)
        .with_env_filter(filter)
        .finish()
}

/// Creates a subscriber that writes plain lines to `file`.
///
/// # Parameters
/// - `file`: An open, appendable log file.
/// - `filter`: Which events to keep.
pub fn file_subscriber(file: File, filter: EnvFilter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_timer(ChronoTimestamp)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .with_env_filter(filter)
        .finish()
}

/// Opens a log file for appending, creating it if missing.
///
/// # Parameters
/// - `path`: Location of the log file.
///
/// # Returns
/// The open file, or [`LoggerError::OpenFile`] if it cannot be opened.
pub fn open_log_file(path: &Path) -> Result<File, LoggerError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggerError::OpenFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Installs the global subscriber for the process.
///
/// # Parameters
/// - `target`: Determines if log lines go to the console or are appended to a file.
///
/// # Returns
/// `Ok(())` the first time. Later calls return [`LoggerError::AlreadyInitialized`].
pub fn init(target: &LogTarget) -> Result<(), LoggerError> {
    let installed = match target {
        LogTarget::Console => {
            tracing::subscriber::set_global_default(console_subscriber(env_filter()))
        }
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            tracing::subscriber::set_global_default(file_subscriber(file, env_filter()))
        }
    };
    installed.map_err(|_| LoggerError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_console_logging() {
        let subscriber = console_subscriber(EnvFilter::new("info"));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Test info message");
            tracing::warn!("Test warning message");
            tracing::error!("Test error message");
        });
        // This test only verifies that logging doesn't panic in console mode.
    }

    #[test]
    fn test_file_logging() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("test.log");
        let subscriber = file_subscriber(open_log_file(&log_file).unwrap(), EnvFilter::new("info"));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Test info message in file");
            tracing::warn!("Test warning message in file");
            tracing::error!("Test error message in file");
            tracing::debug!("Filtered out");
        });

        let contents = fs::read_to_string(&log_file).unwrap();
        assert!(contents.contains("INFO"));
        assert!(contents.contains("Test info message in file"));
        assert!(contents.contains("WARN"));
        assert!(contents.contains("Test warning message in file"));
        assert!(contents.contains("ERROR"));
        assert!(contents.contains("Test error message in file"));
        assert!(!contents.contains("Filtered out"));
        assert!(!contents.contains("\x1b["));
    }

    #[test]
    fn test_file_append() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("append_test.log");

        let first = file_subscriber(open_log_file(&log_file).unwrap(), EnvFilter::new("info"));
        tracing::subscriber::with_default(first, || tracing::info!("First log message"));

        // Reopen to simulate appending to an existing file
        let second = file_subscriber(open_log_file(&log_file).unwrap(), EnvFilter::new("info"));
        tracing::subscriber::with_default(second, || tracing::info!("Second log message"));

        let contents = fs::read_to_string(&log_file).unwrap();
        assert!(contents.contains("First log message"));
        assert!(contents.contains("Second log message"));
    }

    #[test]
    fn test_timestamp_format() {
        let stamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();

        assert_eq!(stamp.len(), "2024-01-01 00:00:00".len());
        assert!(chrono::NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir").join("x.log");

        assert!(matches!(
            open_log_file(&missing),
            Err(LoggerError::OpenFile { .. })
        ));
    }
}

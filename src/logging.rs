//! File-only tracing setup.
//!
//! The TUI owns stdout, so log output never goes to the terminal.
//! Logging is off unless a log file is configured, either explicitly or
//! through the `GREETER_NAV_LOG` env var.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "GREETER_NAV_LOG";

/// Pick the log destination: explicit path first, then the env var.
pub fn log_target(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(LOG_ENV).map(PathBuf::from))
}

/// Initialize tracing into `log_file`, filtered by `RUST_LOG` (default `info`).
///
/// The file is appended to, so earlier sessions are kept.
/// Failure to create the file only warns; the app runs without logs.
pub fn init_tracing(log_file: Option<&Path>) {
    let Some(path) = log_target(log_file) else {
        return;
    };

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Failed to create log file {}: {}", path.display(), e);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // A subscriber may already be installed (tests); keep the first one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let target = log_target(Some(Path::new("/tmp/explicit.log")));
        assert_eq!(target, Some(PathBuf::from("/tmp/explicit.log")));
    }

    #[test]
    fn init_appends_to_an_existing_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greeter.log");
        std::fs::write(&path, "earlier session\n").unwrap();

        init_tracing(Some(path.as_path()));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("earlier session\n"));
    }

    #[test]
    fn init_creates_a_missing_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.log");
        init_tracing(Some(path.as_path()));
        assert!(path.exists());
    }
}

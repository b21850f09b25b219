//! Diagnostic logging.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ResumeConfig;

/// Install the global subscriber. Returns the log file in use, or `None`
/// when logging could not be set up (the app then runs without logs).
pub fn init(config: &ResumeConfig) -> Option<PathBuf> {
    let path = config.resolved_log_file()?;
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("resume: logging disabled ({}: {})", path.display(), err);
            return None;
        }
    };

    tracing_subscriber::registry()
        .with(filter_for(&config.log_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()
        .ok()?;

    tracing::info!(version = crate::cli::VERSION, "Logging to {}", path.display());
    Some(path)
}

/// Parse a filter directive, falling back to `info` when it is invalid.
pub fn filter_for(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_open_log_file_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("resume.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("resume.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_filter_for_valid_directive() {
        assert_eq!(filter_for("debug").to_string(), "debug");
    }
}

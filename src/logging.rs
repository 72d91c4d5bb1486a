//! Tracing setup. The terminal is owned by the UI, so everything goes to a file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` first, then the configured level.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init_tracing(config: &LoggingConfig) -> io::Result<()> {
    let path = config.resolved_file();
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.level))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .init();

    tracing::info!(path = %path.display(), "Logging initialised");
    Ok(())
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("app.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn invalid_level_falls_back() {
        // Must not panic on a directive it cannot parse.
        let _ = build_filter("[[not a directive");
    }
}

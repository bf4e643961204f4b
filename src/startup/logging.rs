//! File-backed tracing.
//!
//! The TUI owns the terminal, so log lines go to `formwiz.log` in the
//! configured directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{fmt, EnvFilter};

use super::config::FormsConfig;

pub const LOG_FILE_NAME: &str = "formwiz.log";

static LOG_PATH: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Open (append) the log file inside `dir`, creating the directory.
pub fn open_log_file(dir: &Path) -> std::io::Result<(fs::File, PathBuf)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Install the global subscriber once. Returns the log file path, or `None`
/// when no directory could be resolved or opened; the wizard then runs
/// without logging. Later calls return the first call's outcome and touch
/// no files.
pub fn init_logging(config: &FormsConfig) -> Option<PathBuf> {
    LOG_PATH.get_or_init(|| install_subscriber(config)).clone()
}

fn install_subscriber(config: &FormsConfig) -> Option<PathBuf> {
    let dir = config.resolved_log_dir()?;
    let (file, path) = match open_log_file(&dir) {
        Ok(opened) => opened,
        Err(e) => {
            eprintln!("Logging disabled: cannot open {}: {}", dir.display(), e);
            return None;
        }
    };

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(super::config::DEFAULT_LOG_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Some(path)
}

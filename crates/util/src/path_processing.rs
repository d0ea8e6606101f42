use std::path::PathBuf;

use dirs_next::{data_local_dir, home_dir};

/// Prefix of the rotated log files written while the terminal UI is active.
pub const LOG_FILE_PREFIX: &str = "adminshell";
/// Extension of the rotated log files.
pub const LOG_FILE_SUFFIX: &str = "log";

pub fn expand_tilde(path: &str) -> PathBuf {
    let p = path.trim();
    if p == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = p.strip_prefix("~/") {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    if let Some(rest) = p.strip_prefix("~\\") {
        // Windows-style
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    PathBuf::from(p)
}

/// Directory holding the log files; the terminal owns stdout while the UI runs.
pub fn default_log_dir() -> PathBuf {
    data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join("adminshell")
}

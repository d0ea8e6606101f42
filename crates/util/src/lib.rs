//! Configuration loading and filesystem helpers for the admin shell.

pub mod config;
pub mod path_processing;

pub use config::{CONFIG_PATH_ENV, ConfigError, ConfigSource, ShellConfig, UserIdentity};
pub use path_processing::{LOG_FILE_PREFIX, LOG_FILE_SUFFIX, default_log_dir, expand_tilde};

//! Shell configuration.
//!
//! Values are layered: built-in defaults, then an optional JSON file. The
//! file lives at `~/.config/adminshell/config.json` on most platforms unless
//! `ADMINSHELL_CONFIG` or an explicit path points elsewhere. Every key is
//! optional; the menu, when present, is validated before the shell starts so
//! a malformed entry is reported at startup instead of misbehaving later.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use adminshell_types::menu::{self, MenuConfigError, MenuEntry, RawMenuEntry};
use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::expand_tilde;

/// Environment variable allowing callers to override the configuration file path.
pub const CONFIG_PATH_ENV: &str = "ADMINSHELL_CONFIG";

/// Default filename for the JSON payload.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Error surfaced when the configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure (for example, permissions or a missing explicit file).
    #[error("failed to read configuration {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON or has the wrong shape.
    #[error("failed to parse configuration {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The menu violates the leaf/container rules.
    #[error("invalid menu configuration: {0}")]
    Menu(#[from] MenuConfigError),
}

/// Identity shown in the header dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Default for UserIdentity {
    fn default() -> Self {
        Self {
            name: "Babor".into(),
            email: "babor@email.com".into(),
        }
    }
}

impl UserIdentity {
    /// Single-letter avatar label.
    pub fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".into())
    }
}

/// Resolved configuration handed to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Brand shown in the sidebar logo block
    pub project_name: String,
    /// Title shown in the top header
    pub title: String,
    pub user: UserIdentity,
    /// Preferred theme id; CLI and `TUI_THEME` take precedence
    pub theme: Option<String>,
    pub menu: Vec<MenuEntry>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            project_name: "Project Name".into(),
            title: "The Mighty Babor Project".into(),
            user: UserIdentity::default(),
            theme: None,
            menu: menu::default_menu(),
        }
    }
}

/// Where the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
}

/// On-disk payload; every key is optional.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    project_name: Option<String>,
    title: Option<String>,
    user: Option<UserIdentity>,
    theme: Option<String>,
    menu: Option<Vec<RawMenuEntry>>,
}

impl ShellConfig {
    /// Load configuration from `path`, or from the default location when `None`.
    ///
    /// An explicit path must exist. A missing file at the default location
    /// yields the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        let (resolved_path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (default_config_path(), false),
        };

        let data = match fs::read_to_string(&resolved_path) {
            Ok(data) => data,
            Err(error) if !explicit && error.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %resolved_path.display(), "No configuration file; using defaults");
                return Ok((Self::default(), ConfigSource::Defaults));
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: resolved_path,
                    source,
                });
            }
        };

        let config = Self::from_json_str(&data).map_err(|error| match error {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: resolved_path.clone(),
                source,
            },
            other => other,
        })?;
        Ok((config, ConfigSource::File(resolved_path)))
    }

    /// Parse and validate a JSON payload layered over the defaults.
    pub fn from_json_str(data: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(data).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        let defaults = Self::default();
        let menu = match file.menu {
            Some(raw) => menu::validate_menu(raw)?,
            None => defaults.menu,
        };
        Ok(Self {
            project_name: file.project_name.unwrap_or(defaults.project_name),
            title: file.title.unwrap_or(defaults.title),
            user: file.user.unwrap_or(defaults.user),
            theme: file.theme.or(defaults.theme),
            menu,
        })
    }
}

/// Default configuration path, honouring `ADMINSHELL_CONFIG`.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("adminshell")
        .join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_object_yields_defaults() {
        let config = ShellConfig::from_json_str("{}").expect("parse");
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.user.initial(), "B");
    }

    #[test]
    fn overrides_are_layered_over_defaults() {
        let config = ShellConfig::from_json_str(
            r#"{ "title": "Ops Console", "user": { "name": "ada", "email": "ada@example.com" }, "theme": "nord" }"#,
        )
        .expect("parse");
        assert_eq!(config.title, "Ops Console");
        assert_eq!(config.project_name, "Project Name");
        assert_eq!(config.user.initial(), "A");
        assert_eq!(config.theme.as_deref(), Some("nord"));
        assert_eq!(config.menu, menu::default_menu());
    }

    #[test]
    fn malformed_menu_is_rejected() {
        let err = ShellConfig::from_json_str(
            r#"{ "menu": [ { "menuName": "Broken", "hasSubmenu": false, "path": "/x", "submenuArray": [] } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Menu(MenuConfigError::ConflictingTarget { index: 0, .. })));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.json");
        let err = ShellConfig::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn missing_default_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("config.json");
        temp_env::with_var(CONFIG_PATH_ENV, Some(missing.as_os_str()), || {
            let (config, source) = ShellConfig::load(None).expect("defaults");
            assert_eq!(source, ConfigSource::Defaults);
            assert_eq!(config, ShellConfig::default());
        });
    }

    #[test]
    fn loads_file_and_reports_parse_errors_with_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "projectName": "Acme" }}"#).expect("write");
        let (config, source) = ShellConfig::load(Some(file.path())).expect("load");
        assert_eq!(config.project_name, "Acme");
        assert_eq!(source, ConfigSource::File(file.path().to_path_buf()));

        let mut broken = tempfile::NamedTempFile::new().expect("temp file");
        write!(broken, "{{ not json").expect("write");
        match ShellConfig::load(Some(broken.path())) {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, broken.path()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}

//! # Admin Shell TUI
//!
//! A terminal admin-dashboard shell: a collapsible side navigation menu, a
//! top header with an avatar popup, a routed content area and toast
//! notifications, drawn with Ratatui.
//!
//! ## Architecture
//!
//! Components own no state of their own. All state lives in `App`; each
//! component reads it while rendering and mutates it while handling input,
//! returning [`adminshell_types::Effect`]s that the runtime executes
//! (navigation, toasts, logout, quit). Keyboard focus is managed with
//! `rat-focus` and rebuilt whenever the routed page changes.

mod app;
mod ui;

#[cfg(test)]
mod test_support;

use adminshell_util::ShellConfig;
use anyhow::Result;

pub use ui::theme::catalog as themes;

/// Options for a TUI session that do not come from the configuration file.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Route shown at startup
    pub initial_path: String,
    /// Theme name taking precedence over `TUI_THEME` and the config file
    pub theme_override: Option<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            initial_path: "/".into(),
            theme_override: None,
        }
    }
}

/// Runs the admin shell until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be put into raw mode or the
/// alternate screen, or if drawing a frame fails.
pub async fn run(config: ShellConfig, options: RunOptions) -> Result<()> {
    ui::runtime::run_app(config, options).await
}

//! Theme styling module for the TUI UI layer.
//!
//! Dracula and Nord palettes, an ANSI 256-color fallback, semantic theme
//! roles, and helper builders for Ratatui widgets. Prefer these helpers over
//! hard-coding colors.

use std::env;

use tracing::{debug, warn};

pub mod ansi256;
pub mod catalog;
pub mod dracula;
pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
use catalog::ThemeDefinition;
pub use dracula::{DraculaTheme, DraculaThemeHighContrast};
pub use nord::{NordTheme, NordThemeHighContrast};
pub use roles::Theme;

/// Environment variable naming the preferred theme.
pub const THEME_ENV: &str = "TUI_THEME";

/// Theme plus metadata describing how it was selected.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    fn from_definition(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme.
///
/// ANSI-only terminals always get the fallback palette. Otherwise the first
/// name that resolves wins: `override_theme` (the `--theme` flag), then
/// `TUI_THEME`, then `preferred_theme` from the configuration file.
pub fn load(override_theme: Option<&str>, preferred_theme: Option<&str>) -> LoadedTheme {
    let from_env = env::var(THEME_ENV).ok();
    let requests = theme_requests(override_theme, from_env.as_deref(), preferred_theme);

    if matches!(detect_color_capability(), ColorCapability::Ansi256) {
        let fallback = catalog::default_ansi();
        match dropped_request(&requests, fallback) {
            Some((origin, name)) => warn!(
                theme = name,
                origin,
                fallback = fallback.id,
                "terminal lacks truecolor support; requested theme ignored"
            ),
            None => debug!("ANSI-only terminal detected; using fallback palette."),
        }
        return LoadedTheme::from_definition(fallback);
    }

    for (origin, name) in requests {
        match catalog::resolve(name) {
            Some(definition) => {
                debug!(theme = definition.id, origin, "theme selected");
                return LoadedTheme::from_definition(definition);
            }
            None => warn!(theme = name, origin, "unknown theme name ignored"),
        }
    }

    LoadedTheme::from_definition(catalog::default_truecolor())
}

/// Non-empty theme names in precedence order, tagged with their origin.
fn theme_requests<'a>(
    override_theme: Option<&'a str>,
    from_env: Option<&'a str>,
    preferred_theme: Option<&'a str>,
) -> Vec<(&'static str, &'a str)> {
    [("--theme", override_theme), (THEME_ENV, from_env), ("config", preferred_theme)]
        .into_iter()
        .filter_map(|(origin, name)| name.map(str::trim).filter(|name| !name.is_empty()).map(|name| (origin, name)))
        .collect()
}

/// The winning request when it names something other than `fallback`.
fn dropped_request<'a>(requests: &[(&'static str, &'a str)], fallback: &ThemeDefinition) -> Option<(&'static str, &'a str)> {
    let (origin, name) = *requests.first()?;
    match catalog::resolve(name) {
        Some(definition) if definition.id == fallback.id => None,
        _ => Some((origin, name)),
    }
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var("TUI_COLOR_MODE").ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    if env::var("TUI_FORCE_TRUECOLOR")
        .ok()
        .map(|value| is_truthy(value.trim()))
        .unwrap_or(false)
    {
        return ColorCapability::Truecolor;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enable" | "enabled"
    )
}

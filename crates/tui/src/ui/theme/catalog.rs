use super::{Ansi256Theme, DraculaTheme, DraculaThemeHighContrast, NordTheme, NordThemeHighContrast, Theme};

/// Describes a selectable theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used in configuration and `--theme`.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Short description printed by `--check`.
    pub description: &'static str,
    /// Theme aliases (e.g., env overrides) that map back to this definition.
    pub aliases: &'static [&'static str],
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

/// Ordered list of selectable themes.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "dracula",
        label: "Dracula",
        description: "High-contrast default tuned for dark terminals.",
        aliases: &["dracula"],
        is_ansi_fallback: false,
        factory: || Box::new(DraculaTheme::new()),
    },
    ThemeDefinition {
        id: "dracula_hc",
        label: "Dracula High Contrast",
        description: "Sharper borders and brighter copy for dim displays.",
        aliases: &["dracula_hc", "dracula-high-contrast", "dracula-hc", "draculahc"],
        is_ansi_fallback: false,
        factory: || Box::new(DraculaThemeHighContrast::new()),
    },
    ThemeDefinition {
        id: "nord",
        label: "Nord",
        description: "Calm polar blues with aurora semantic accents.",
        aliases: &["nord"],
        is_ansi_fallback: false,
        factory: || Box::new(NordTheme::new()),
    },
    ThemeDefinition {
        id: "nord_hc",
        label: "Nord High Contrast",
        description: "Nord surfaces with stronger borders and body text.",
        aliases: &["nord_hc", "nord-high-contrast", "nord-hc", "nordhc"],
        is_ansi_fallback: false,
        factory: || Box::new(NordThemeHighContrast::new()),
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        description: "Indexed fallback for 8-bit terminals.",
        aliases: &["ansi256", "ansi", "256"],
        is_ansi_fallback: true,
        factory: || Box::new(Ansi256Theme::new()),
    },
];

/// Iterate over all available definitions.
pub fn all() -> &'static [ThemeDefinition] {
    THEME_DEFINITIONS
}

/// Locate a definition by id or alias (case-insensitive).
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let normalized = name.trim().to_ascii_lowercase();
    THEME_DEFINITIONS.iter().find(|definition| {
        definition.id.eq_ignore_ascii_case(&normalized) || definition.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(&normalized))
    })
}

/// Preferred default for truecolor terminals.
pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

/// Preferred default for ANSI-only terminals.
pub fn default_ansi() -> &'static ThemeDefinition {
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.is_ansi_fallback)
        .unwrap_or(&THEME_DEFINITIONS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_ids_and_aliases_case_insensitively() {
        assert_eq!(resolve("Nord").map(|d| d.id), Some("nord"));
        assert_eq!(resolve(" dracula-hc ").map(|d| d.id), Some("dracula_hc"));
        assert_eq!(resolve("ANSI").map(|d| d.id), Some("ansi256"));
        assert!(resolve("solarized").is_none());
    }

    #[test]
    fn defaults_match_capabilities() {
        assert!(!default_truecolor().is_ansi_fallback);
        assert!(default_ansi().is_ansi_fallback);
        let ids: Vec<_> = all().iter().map(|d| d.id).collect();
        assert_eq!(ids, ["dracula", "dracula_hc", "nord", "nord_hc", "ansi256"]);
    }
}

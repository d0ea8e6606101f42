use std::fmt::Debug;

use adminshell_types::Severity;
use ratatui::style::{Color, Modifier, Style};

/// Semantic color roles used throughout the UI.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    pub surface_muted: Color,
    pub border: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    pub accent_primary: Color,
    pub accent_secondary: Color,

    pub info: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub selection_bg: Color,
    pub selection_fg: Color,
    pub focus: Color,

    /// Background of the sidebar; a shade apart from the content surface.
    pub sidebar_bg: Color,

    /// Background used behind popups (header menu, toasts).
    pub popup_bg: Color,
}

/// Theme trait exposes semantic roles and common style builders.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    // Text styles
    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    // Borders and focus
    fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles().focus } else { self.roles().border };
        Style::default().fg(color)
    }

    // Selection
    fn selection_style(&self) -> Style {
        Style::default().fg(self.roles().selection_fg).bg(self.roles().selection_bg)
    }

    fn sidebar_style(&self) -> Style {
        Style::default().bg(self.roles().sidebar_bg).fg(self.roles().text)
    }

    fn popup_style(&self) -> Style {
        Style::default().bg(self.roles().popup_bg).fg(self.roles().text)
    }

    /// Foreground for a toast or status message of the given severity.
    fn severity_style(&self, severity: Severity) -> Style {
        let roles = self.roles();
        let color = match severity {
            Severity::Info => roles.info,
            Severity::Success => roles.success,
            Severity::Warn => roles.warning,
            Severity::Error => roles.error,
        };
        Style::default().fg(color)
    }

    // Accents
    fn accent_emphasis_style(&self) -> Style {
        Style::default().fg(self.roles().accent_primary).add_modifier(Modifier::BOLD)
    }
}

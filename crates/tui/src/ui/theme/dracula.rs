use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Dracula palette (https://draculatheme.com/contribute)
pub const BG: Color = Color::Rgb(0x28, 0x2A, 0x36); // #282a36
pub const CURRENT_LINE: Color = Color::Rgb(0x44, 0x47, 0x5A); // #44475a
pub const FOREGROUND: Color = Color::Rgb(0xF8, 0xF8, 0xF2); // #f8f8f2
pub const COMMENT: Color = Color::Rgb(0x62, 0x72, 0xA4); // #6272a4

pub const CYAN: Color = Color::Rgb(0x8B, 0xE9, 0xFD); // #8be9fd
pub const GREEN: Color = Color::Rgb(0x50, 0xFA, 0x7B); // #50fa7b
pub const ORANGE: Color = Color::Rgb(0xFF, 0xB8, 0x6C); // #ffb86c
pub const PINK: Color = Color::Rgb(0xFF, 0x79, 0xC6); // #ff79c6
pub const PURPLE: Color = Color::Rgb(0xBD, 0x93, 0xF9); // #bd93f9
pub const RED: Color = Color::Rgb(0xFF, 0x55, 0x55); // #ff5555

pub const BG_SIDEBAR: Color = Color::Rgb(0x1E, 0x1F, 0x29);
pub const BG_POPUP: Color = CURRENT_LINE;

fn build_dracula_roles() -> ThemeRoles {
    ThemeRoles {
        background: BG,
        surface: BG,
        surface_muted: CURRENT_LINE,
        border: CURRENT_LINE,

        text: FOREGROUND,
        text_secondary: COMMENT,
        text_muted: COMMENT,

        accent_primary: PINK,
        accent_secondary: CYAN,

        info: CYAN,
        success: GREEN,
        warning: ORANGE,
        error: RED,

        selection_bg: CURRENT_LINE,
        selection_fg: FOREGROUND,
        focus: CYAN,
        sidebar_bg: BG_SIDEBAR,
        popup_bg: BG_POPUP,
    }
}

/// Default Dracula theme tuned for dark terminals.
#[derive(Debug, Clone)]
pub struct DraculaTheme {
    roles: ThemeRoles,
}

impl DraculaTheme {
    pub fn new() -> Self {
        Self {
            roles: build_dracula_roles(),
        }
    }
}

impl Theme for DraculaTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// High-contrast Dracula: stronger borders and selection.
#[derive(Debug, Clone)]
pub struct DraculaThemeHighContrast {
    roles: ThemeRoles,
}

impl DraculaThemeHighContrast {
    pub fn new() -> Self {
        let mut roles = build_dracula_roles();
        roles.border = PURPLE;
        roles.text_secondary = FOREGROUND;
        roles.selection_bg = PURPLE;
        roles.selection_fg = BG;
        Self { roles }
    }
}

impl Theme for DraculaThemeHighContrast {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

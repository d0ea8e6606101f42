use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use super::roles::Theme;
use crate::ui::theme::roles::ThemeRoles;

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Darken an RGB color by a multiplicative factor (0.0..=1.0).
/// If the color is not RGB, returns it unchanged.
pub fn darken_rgb(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.clamp(0.0, 1.0);
            let dr = (r as f32 * f).round().clamp(0.0, 255.0) as u8;
            let dg = (g as f32 * f).round().clamp(0.0, 255.0) as u8;
            let db = (b as f32 * f).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(dr, dg, db)
        }
        other => other,
    }
}

/// Move an RGB color toward white by `amount` (0.0..=1.0).
pub fn lighten_rgb(color: Color, amount: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let a = amount.clamp(0.0, 1.0);
            let lift = |channel: u8| (channel as f32 + (255.0 - channel as f32) * a).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(lift(r), lift(g), lift(b))
        }
        other => other,
    }
}

/// Primary button style (filled accent background).
pub fn button_primary_style<T: Theme + ?Sized>(theme: &T, enabled: bool) -> Style {
    if enabled {
        let ThemeRoles {
            accent_primary, background, ..
        } = *theme.roles();
        Style::default().bg(accent_primary).fg(background).add_modifier(Modifier::BOLD)
    } else {
        let ThemeRoles {
            surface_muted, text_muted, ..
        } = *theme.roles();
        Style::default().bg(surface_muted).fg(text_muted)
    }
}

/// Secondary control style (accent text on the surrounding surface).
pub fn button_secondary_style<T: Theme + ?Sized>(theme: &T, enabled: bool) -> Style {
    if !enabled {
        return theme.text_muted_style();
    }
    Style::default().fg(theme.roles().accent_secondary)
}

/// Flags controlling how [`render_button`] draws a button.
#[derive(Debug, Clone, Copy)]
pub struct ButtonRenderOptions {
    pub is_enabled: bool,
    pub is_focused: bool,
    pub borders: Borders,
}

impl ButtonRenderOptions {
    pub fn new(is_enabled: bool, is_focused: bool, borders: Borders) -> Self {
        Self {
            is_enabled,
            is_focused,
            borders,
        }
    }
}

/// Renders a primary (filled) button
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, theme: &T, options: ButtonRenderOptions) {
    let border_style = if options.is_enabled {
        theme.border_style(options.is_focused)
    } else {
        theme.text_muted_style()
    };

    let button_style = button_primary_style(theme, options.is_enabled);

    let padding = if options.borders.is_empty() {
        Padding::uniform(1) // match the bordered button size
    } else {
        Padding::uniform(0)
    };

    frame.render_widget(
        Paragraph::new(label)
            .centered()
            .block(
                Block::bordered()
                    .borders(options.borders)
                    .border_style(border_style)
                    .padding(padding),
            )
            .style(button_style),
        area,
    );
}

/// Builds `key description` hint pairs for the hints bar.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darken_and_lighten_only_touch_rgb() {
        assert_eq!(darken_rgb(Color::Rgb(100, 200, 50), 0.5), Color::Rgb(50, 100, 25));
        assert_eq!(lighten_rgb(Color::Rgb(0, 255, 100), 0.5), Color::Rgb(128, 255, 178));
        assert_eq!(darken_rgb(Color::Indexed(12), 0.5), Color::Indexed(12));
        assert_eq!(lighten_rgb(Color::Reset, 0.5), Color::Reset);
    }
}

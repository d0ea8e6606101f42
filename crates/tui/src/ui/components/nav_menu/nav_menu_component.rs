use adminshell_types::Effect;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::{NavEvent, NavMenuState, NavRow};
use crate::app::App;
use crate::ui::components::{Component, find_target_index_by_mouse_position};
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::utils::{rect_contains, truncate_to_width};

/// Collapse control shown in the expanded logo block.
const COLLAPSE_GLYPH: &str = "◀";
/// Marker appended to container entries.
const EXPAND_GLYPH: &str = "▾";
/// Letter rendered inside the logo block.
const LOGO_MARK: &str = "P";
/// Indentation of submenu children, in columns.
const SUBMENU_INDENT: usize = 3;

/// Maps an icon reference to a terminal glyph.
///
/// Icon references are opaque; only the file stem is inspected. Unknown icons
/// fall back to the first letter of `name`.
pub(crate) fn icon_glyph(icon: &str, name: &str) -> String {
    let stem = icon.rsplit(['/', '\\']).next().and_then(|file| file.split('.').next()).unwrap_or_default();
    match stem.to_ascii_lowercase().as_str() {
        "home" => "⌂".to_string(),
        "users" | "user" => "♟".to_string(),
        "settings" | "gear" => "⚙".to_string(),
        _ => name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "•".to_string()),
    }
}

/// The collapsible side menu.
///
/// Renders the logo block, the collapse control and one row per visible
/// [`NavRow`]. All state transitions go through [`NavMenuState::apply`].
#[derive(Debug, Default)]
pub struct NavMenuComponent;

impl NavMenuComponent {
    fn row_line<'a>(state: &'a NavMenuState, row: NavRow, width: usize, theme: &dyn Theme) -> Line<'a> {
        let collapsed = state.is_collapsed();
        match row {
            NavRow::Entry(index) => {
                let entry = &state.entries[index];
                let glyph = icon_glyph(&entry.icon, &entry.name);
                if collapsed {
                    return Line::from(glyph).centered();
                }
                let suffix = if entry.is_container() { format!(" {EXPAND_GLYPH}") } else { String::new() };
                let label_width = width.saturating_sub(glyph.width() + 3 + suffix.width());
                let mut spans = vec![
                    Span::raw(format!(" {glyph} ")),
                    Span::raw(truncate_to_width(&entry.name, label_width)),
                ];
                if !suffix.is_empty() {
                    spans.push(Span::styled(suffix, theme.text_muted_style()));
                }
                Line::from(spans)
            }
            NavRow::SubmenuItem { entry, item } => {
                let child = &state.entries[entry].submenu()[item];
                let glyph = icon_glyph(&child.icon, &child.name);
                let label_width = width.saturating_sub(SUBMENU_INDENT + glyph.width() + 3);
                Line::from(vec![
                    Span::raw(" ".repeat(SUBMENU_INDENT)),
                    Span::styled(format!(" {glyph} "), theme.text_secondary_style()),
                    Span::raw(truncate_to_width(&child.name, label_width)),
                ])
            }
        }
    }

    fn render_logo(frame: &mut Frame, area: Rect, app: &App) -> (Rect, Rect) {
        let theme = &*app.ctx.theme;
        let collapsed = app.nav_menu.is_collapsed();
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border_style(false));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mark = Span::styled(format!("[{LOGO_MARK}]"), th::button_primary_style(theme, true));
        if collapsed {
            frame.render_widget(Paragraph::new(Line::from(mark).centered()), inner);
            return (area, Rect::default());
        }

        let [title_area, button_area] = Layout::horizontal([Constraint::Min(1), Constraint::Length(3)]).areas(inner);
        let name_width = (title_area.width as usize).saturating_sub(5);
        let title = Line::from(vec![
            Span::raw(" "),
            mark,
            Span::raw(" "),
            Span::styled(
                truncate_to_width(&app.ctx.project_name, name_width),
                theme.text_primary_style().add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), title_area);
        frame.render_widget(
            Paragraph::new(Line::from(COLLAPSE_GLYPH).centered()).style(th::button_secondary_style(theme, true)),
            button_area,
        );
        (title_area, button_area)
    }
}

impl Component for NavMenuComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let state = &mut app.nav_menu;
        match key.code {
            KeyCode::Down => {
                state.move_cursor(1);
                Vec::new()
            }
            KeyCode::Up => {
                state.move_cursor(-1);
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') => state.activate_cursor(),
            KeyCode::Left | KeyCode::Char('[') => state.apply(NavEvent::CollapseRequested),
            KeyCode::Right | KeyCode::Char(']') => state.apply(NavEvent::HeaderActivated),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let (x, y) = (mouse.column, mouse.row);
        if !rect_contains(app.nav_menu.last_area, x, y) {
            return Vec::new();
        }
        app.focus.focus(&app.nav_menu);

        let state = &mut app.nav_menu;
        if !state.is_collapsed() && rect_contains(state.collapse_button_area, x, y) {
            return state.apply(NavEvent::CollapseRequested);
        }
        if rect_contains(state.logo_area, x, y) {
            return state.apply(NavEvent::HeaderActivated);
        }
        let Some(index) = find_target_index_by_mouse_position(&state.last_area, &state.row_areas, x, y) else {
            return Vec::new();
        };
        let Some(row) = state.visible_rows().get(index).copied() else {
            return Vec::new();
        };
        state.set_cursor_row(row);
        state.apply(row.activation_event())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let focused = app.nav_menu.container_focus.get();
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(app.ctx.theme.border_style(focused))
            .style(app.ctx.theme.sidebar_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = self.get_preferred_layout(app, inner);
        let (logo_area, button_area) = Self::render_logo(frame, layout[0], app);

        let rows_area = layout[1];
        let theme = &*app.ctx.theme;
        let state = &app.nav_menu;
        let rows = state.visible_rows();
        let mut row_areas = Vec::with_capacity(rows.len());
        for (position, row) in rows.iter().copied().enumerate() {
            let offset = position as u16;
            if offset >= rows_area.height {
                break;
            }
            let row_area = Rect::new(rows_area.x, rows_area.y + offset, rows_area.width, 1);
            let mut style = Style::default();
            if state.is_row_active(row, &app.location) {
                style = theme.selection_style().add_modifier(Modifier::BOLD);
            }
            if focused && position == state.cursor() {
                style = style.patch(theme.border_style(true)).add_modifier(Modifier::REVERSED);
            }
            let line = Self::row_line(state, row, row_area.width as usize, theme);
            frame.render_widget(Paragraph::new(line).style(style), row_area);
            row_areas.push(row_area);
        }

        let state = &mut app.nav_menu;
        state.last_area = area;
        state.logo_area = logo_area;
        state.collapse_button_area = button_area;
        state.row_areas = row_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[(" Enter", " Open "), (" ↑/↓", " Move "), (" ←/→", " Collapse/Expand ")],
        )
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(3), // Logo block
            Constraint::Min(0),    // Rows
        ])
        .split(area)
        .to_vec()
    }
}

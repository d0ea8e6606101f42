use adminshell_types::Effect;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::HeaderMenuItem;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::{rect_contains, truncate_to_width};

const LOGOUT_LABEL: &str = "Logout";
const MIN_POPUP_WIDTH: u16 = 20;
/// Border, name, email, separator, Logout, border.
const POPUP_HEIGHT: u16 = 6;

/// Title bar with the user identity control and its popup menu.
#[derive(Debug, Default)]
pub struct TopHeaderComponent;

impl TopHeaderComponent {
    fn popup_rect(app: &App, bounds: Rect) -> Rect {
        let user = &app.ctx.user;
        let content_width = user.name.width().max(user.email.width()).max(LOGOUT_LABEL.width()) as u16;
        let width = (content_width + 4).max(MIN_POPUP_WIDTH).min(bounds.width);
        let avatar = app.header.avatar_area;
        let right = avatar.right().min(bounds.right());
        let x = right.saturating_sub(width).max(bounds.x);
        let y = app.header.last_area.bottom().min(bounds.bottom());
        let height = POPUP_HEIGHT.min(bounds.bottom().saturating_sub(y));
        Rect::new(x, y, width, height)
    }

    fn render_popup(frame: &mut Frame, app: &mut App) {
        let area = Self::popup_rect(app, frame.area());
        let theme = &*app.ctx.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(true))
            .style(theme.popup_style());
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Email
            Constraint::Length(1), // Separator
            Constraint::Length(1), // Logout
        ])
        .split(inner);
        let width = inner.width as usize;
        let user = &app.ctx.user;
        frame.render_widget(
            Paragraph::new(Span::styled(
                truncate_to_width(&user.name, width),
                theme.text_primary_style().add_modifier(Modifier::BOLD),
            )),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(truncate_to_width(&user.email, width), theme.text_muted_style())),
            rows[1],
        );
        frame.render_widget(Paragraph::new("─".repeat(width)).style(theme.border_style(false)), rows[2]);
        frame.render_widget(
            Paragraph::new(Line::from(vec![Span::raw("⏻ "), Span::raw(LOGOUT_LABEL)])).style(theme.selection_style()),
            rows[3],
        );

        app.header.popup_area = area;
        app.header.logout_area = rows[3];
    }
}

impl Component for TopHeaderComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let state = &mut app.header;
        if state.is_popup_open() {
            return match key.code {
                KeyCode::Esc => {
                    state.close_popup();
                    Vec::new()
                }
                KeyCode::Enter | KeyCode::Char(' ') => state.activate(HeaderMenuItem::Logout),
                _ => Vec::new(),
            };
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                state.toggle_popup();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Clicks on the avatar toggle the popup. While the popup is open every
    /// click is consumed here: Logout runs the action and anything outside the
    /// popup closes it.
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let (x, y) = (mouse.column, mouse.row);
        let state = &mut app.header;
        if state.is_popup_open() {
            if rect_contains(state.logout_area, x, y) {
                return state.activate(HeaderMenuItem::Logout);
            }
            if !rect_contains(state.popup_area, x, y) {
                state.close_popup();
            }
            return Vec::new();
        }
        if rect_contains(state.avatar_area, x, y) {
            state.toggle_popup();
            app.focus.focus(&app.header);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let focused = app.header.focus.get();
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border_style(false))
            .style(th::panel_style(theme));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let user = &app.ctx.user;
        let avatar_label = format!(" {} ", user.initial());
        let name_width = user.name.width() as u16 + 1;
        let [title_area, name_area, avatar_area] = Layout::horizontal([
            Constraint::Min(1),
            Constraint::Length(name_width),
            Constraint::Length(avatar_label.width() as u16 + 2),
        ])
        .areas(inner);

        let title = truncate_to_width(&app.ctx.title, title_area.width.saturating_sub(1) as usize);
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {title}"), theme.accent_emphasis_style())),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(user.name.as_str(), theme.text_secondary_style())).right_aligned(),
            name_area,
        );
        let avatar_style = if focused || app.header.is_popup_open() {
            th::button_primary_style(theme, true).add_modifier(Modifier::REVERSED)
        } else {
            th::button_primary_style(theme, true)
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![Span::raw(" "), Span::styled(avatar_label, avatar_style)])),
            avatar_area,
        );

        app.header.last_area = area;
        app.header.avatar_area = avatar_area;
        if app.header.is_popup_open() {
            Self::render_popup(frame, app);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let hints: &[(&str, &str)] = if app.header.is_popup_open() {
            &[(" Enter", " Logout "), (" Esc", " Close ")]
        } else {
            &[(" Enter", " Account menu ")]
        };
        th::build_hint_spans(&*app.ctx.theme, hints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_lines, test_app};
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &mut App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("terminal");
        terminal
            .draw(|frame| {
                let header_area = Rect::new(0, 0, frame.area().width, 3);
                TopHeaderComponent.render(frame, header_area, app)
            })
            .expect("draw");
        buffer_lines(terminal.backend().buffer())
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn renders_title_name_and_avatar() {
        let mut app = test_app();
        let screen = draw(&mut app).join("\n");
        assert!(screen.contains("The Mighty Babor Project"));
        assert!(screen.contains("Babor"));
        assert!(screen.contains(" B "));
        assert!(!screen.contains(LOGOUT_LABEL));
    }

    #[test]
    fn avatar_click_opens_popup_with_identity_and_logout() {
        let mut app = test_app();
        draw(&mut app);
        let avatar = app.header.avatar_area;
        TopHeaderComponent.handle_mouse_events(&mut app, click(avatar.x + 2, avatar.y));
        assert!(app.header.is_popup_open());

        let screen = draw(&mut app).join("\n");
        assert!(screen.contains("babor@email.com"));
        assert!(screen.contains(LOGOUT_LABEL));
        assert!(app.header.popup_area.y >= 3);
        assert_eq!(app.header.popup_area.right(), avatar.right());
    }

    #[test]
    fn logout_click_emits_logout_and_closes() {
        let mut app = test_app();
        draw(&mut app);
        app.header.toggle_popup();
        draw(&mut app);
        let logout = app.header.logout_area;
        let effects = TopHeaderComponent.handle_mouse_events(&mut app, click(logout.x, logout.y));
        assert_eq!(effects, vec![Effect::Logout]);
        assert!(!app.header.is_popup_open());
    }

    #[test]
    fn outside_click_and_escape_close_popup() {
        let mut app = test_app();
        draw(&mut app);
        app.header.toggle_popup();
        draw(&mut app);
        assert!(TopHeaderComponent.handle_mouse_events(&mut app, click(0, 11)).is_empty());
        assert!(!app.header.is_popup_open());

        app.header.toggle_popup();
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert!(TopHeaderComponent.handle_key_events(&mut app, esc).is_empty());
        assert!(!app.header.is_popup_open());
    }

    #[test]
    fn enter_opens_then_logs_out() {
        let mut app = test_app();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert!(TopHeaderComponent.handle_key_events(&mut app, enter).is_empty());
        assert!(app.header.is_popup_open());
        assert_eq!(TopHeaderComponent.handle_key_events(&mut app, enter), vec![Effect::Logout]);
        assert!(!app.header.is_popup_open());
    }
}

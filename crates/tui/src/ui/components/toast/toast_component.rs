use adminshell_types::{Effect, Severity};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::ui::components::{Component, find_target_index_by_mouse_position};
use crate::ui::utils::{anchored_top_right, truncate_to_width};

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 4;

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "ℹ",
        Severity::Success => "✓",
        Severity::Warn => "!",
        Severity::Error => "✗",
    }
}

/// Stacks live toasts in the top-right corner of the content region.
/// Clicking a toast dismisses it.
#[derive(Debug, Default)]
pub struct ToastComponent;

impl Component for ToastComponent {
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let container = app.toasts.areas.iter().fold(Rect::default(), |acc, area| acc.union(*area));
        if let Some(index) = find_target_index_by_mouse_position(&container, &app.toasts.areas, mouse.column, mouse.row) {
            app.toasts.dismiss(index);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let mut areas = Vec::with_capacity(app.toasts.items().len());
        for (position, item) in app.toasts.items().iter().enumerate() {
            let offset = position as u16 * TOAST_HEIGHT;
            let toast_area = anchored_top_right(area, TOAST_WIDTH, TOAST_HEIGHT, offset);
            if toast_area.height < TOAST_HEIGHT {
                break;
            }
            let accent = theme.severity_style(item.toast.severity);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(accent)
                .style(theme.popup_style());
            let inner = block.inner(toast_area);
            let width = inner.width as usize;
            let lines = vec![
                Line::from(vec![
                    Span::styled(format!("{} ", severity_icon(item.toast.severity)), accent),
                    Span::styled(
                        truncate_to_width(&item.toast.summary, width.saturating_sub(2)),
                        accent.add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(truncate_to_width(&item.toast.detail, width), theme.text_primary_style())),
            ];
            frame.render_widget(Clear, toast_area);
            frame.render_widget(Paragraph::new(lines).block(block), toast_area);
            areas.push(toast_area);
        }
        app.toasts.areas = areas;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_lines, test_app};
    use crate::ui::components::pages::dashboard::check_toast;
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Instant;

    #[test]
    fn renders_and_dismisses_on_click() {
        let mut app = test_app();
        app.toasts.push(check_toast(), Instant::now());
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).expect("terminal");
        terminal
            .draw(|frame| ToastComponent.render(frame, frame.area(), &mut app))
            .expect("draw");
        let screen = buffer_lines(terminal.backend().buffer()).join("\n");
        assert!(screen.contains("Success"));
        assert!(screen.contains("Button clicked successfully!"));

        let area = app.toasts.areas[0];
        assert_eq!(area.right(), 60);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: area.x + 1,
            row: area.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        ToastComponent.handle_mouse_events(&mut app, click);
        assert!(app.toasts.is_empty());
    }
}

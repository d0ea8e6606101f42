use adminshell_types::{Effect, Toast};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    text::Span,
    widgets::{Borders, Paragraph},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers::{self as th, ButtonRenderOptions, render_button};
use crate::ui::utils::rect_contains;

const CHECK_LABEL: &str = "✓ Check";

/// Toast raised by the Check button.
pub fn check_toast() -> Toast {
    Toast::success("Success", "Button clicked successfully!")
}

/// State for the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Focus flag of the Check button.
    pub f_check: FocusFlag,
    /// Last rendered Check button.
    pub check_area: Rect,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            f_check: FocusFlag::new().with_name("dashboard.check"),
            check_area: Rect::default(),
        }
    }
}

impl HasFocus for DashboardState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.f_check.clone()
    }

    fn area(&self) -> Rect {
        self.check_area
    }
}

/// Index page with a single Check button that raises a success toast.
#[derive(Debug, Default)]
pub struct DashboardComponent;

impl Component for DashboardComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if !app.dashboard.f_check.get() {
            return Vec::new();
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => vec![Effect::ShowToast(check_toast())],
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || !rect_contains(app.dashboard.check_area, mouse.column, mouse.row) {
            return Vec::new();
        }
        app.focus.focus(&app.dashboard);
        vec![Effect::ShowToast(check_toast())]
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let focused = app.dashboard.f_check.get();
        let block = th::block(theme, Some(" Dashboard "), false).borders(Borders::NONE);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = self.get_preferred_layout(app, inner);
        frame.render_widget(
            Paragraph::new(Span::styled("Dashboard", theme.text_primary_style())),
            layout[0],
        );
        render_button(
            frame,
            layout[1],
            CHECK_LABEL,
            theme,
            ButtonRenderOptions::new(true, focused, Borders::ALL),
        );
        app.dashboard.check_area = layout[1];
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" Enter", " Check ")])
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        let [text_area, _, button_row] = Layout::vertical([
            Constraint::Length(1), // Page text
            Constraint::Length(1), // Gap
            Constraint::Length(3), // Button
        ])
        .areas(area.inner(ratatui::layout::Margin::new(1, 0)));
        let [button_area] = Layout::horizontal([Constraint::Length(13)]).flex(Flex::Center).areas(button_row);
        vec![text_area, button_area]
    }
}

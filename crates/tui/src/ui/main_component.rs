use adminshell_types::{Effect, Msg, Page};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use rat_focus::FocusBuilder;
use ratatui::{
    prelude::*,
    style::Style,
    widgets::Paragraph,
};

use super::components::{
    Component, DashboardComponent, NavMenuComponent, PlaceholderPage, ToastComponent, TopHeaderComponent,
};
use super::theme::theme_helpers as th;
use crate::app::App;
use crate::ui::utils::rect_contains;

/// Height of the top header, including its bottom border.
const HEADER_HEIGHT: u16 = 3;

/// Page component the router mounts for `page`.
fn page_component(page: Page) -> Box<dyn Component> {
    match page {
        Page::Dashboard => Box::new(DashboardComponent),
        other => Box::new(PlaceholderPage::new(other)),
    }
}

/// Root layout: sidebar, header, routed content and hints bar, with the
/// header popup and toasts drawn as overlays.
pub struct MainView {
    /// Component for the current page
    content_view: Box<dyn Component>,
    nav_menu_view: NavMenuComponent,
    header_view: TopHeaderComponent,
    toast_view: ToastComponent,
}

impl MainView {
    pub fn new(app: &App) -> Self {
        Self {
            content_view: page_component(app.page),
            nav_menu_view: NavMenuComponent,
            header_view: TopHeaderComponent,
            toast_view: ToastComponent,
        }
    }

    /// Routes to `path` and mounts the resolved page.
    ///
    /// Not intended to be called directly; components return
    /// `Effect::Navigate` and the runtime calls this.
    pub fn set_current_page(&mut self, app: &mut App, path: &str) {
        let page = app.navigate(path);
        self.content_view = page_component(page);
        self.rebuild_focus(app);
    }

    /// Rebuilds the focus tree from the current widget areas, keeping the
    /// focused widget when it is still mounted.
    pub fn rebuild_focus(&mut self, app: &mut App) {
        let old_focus = std::mem::take(&mut app.focus);
        app.focus = FocusBuilder::rebuild_for(app, Some(old_focus));
        if app.focus.focused().is_none() {
            self.restore_focus(app);
        }
    }

    pub fn restore_focus(&mut self, app: &mut App) {
        app.focus.focus(&app.nav_menu);
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        let mut effects = app.update(&msg);
        effects.extend(self.content_view.handle_message(app, msg));
        effects
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        // The open popup traps keyboard input until it closes.
        if app.header.is_popup_open() {
            return self.header_view.handle_key_events(app, key);
        }

        match key.code {
            KeyCode::Tab => {
                app.focus.next();
                return Vec::new();
            }
            KeyCode::BackTab => {
                app.focus.prev();
                return Vec::new();
            }
            KeyCode::Char('q') if key.modifiers == KeyModifiers::NONE => return vec![Effect::Quit],
            _ => {}
        }

        if app.nav_menu.container_focus.get() {
            return self.nav_menu_view.handle_key_events(app, key);
        }

        if app.header.focus.get() {
            return self.header_view.handle_key_events(app, key);
        }

        self.content_view.handle_key_events(app, key)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        // Overlays first; each consumes the clicks that land on it.
        if app.header.is_popup_open() {
            return self.header_view.handle_mouse_events(app, mouse);
        }
        if app.toasts.areas.iter().any(|area| rect_contains(*area, mouse.column, mouse.row)) {
            return self.toast_view.handle_mouse_events(app, mouse);
        }

        let mut effects = self.nav_menu_view.handle_mouse_events(app, mouse);
        effects.extend(self.header_view.handle_mouse_events(app, mouse));
        effects.extend(self.content_view.handle_mouse_events(app, mouse));
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        // Fill the entire background with the theme's background color for consistency
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let layout = self.get_preferred_layout(app, area);
        self.nav_menu_view.render(frame, layout[0], app);
        self.content_view.render(frame, layout[2], app);
        // Header after content so its popup overlays the page.
        self.header_view.render(frame, layout[1], app);
        self.toast_view.render(frame, layout[2], app);

        let hint_spans: Vec<Span> = self.get_hint_spans(app);
        let hints_widget = Paragraph::new(Line::from(hint_spans)).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints_widget, layout[3]);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut hint_spans: Vec<Span> = vec![Span::styled("Hints: ", app.ctx.theme.text_muted_style())];

        if app.header.is_popup_open() || app.header.focus.get() {
            hint_spans.extend(self.header_view.get_hint_spans(app));
        } else if app.nav_menu.container_focus.get() {
            hint_spans.extend(self.nav_menu_view.get_hint_spans(app));
        } else {
            hint_spans.extend(self.content_view.get_hint_spans(app));
        }

        hint_spans.extend(th::build_hint_spans(&*app.ctx.theme, &[(" Tab", " Focus "), (" q", " Quit ")]));
        hint_spans
    }

    fn get_preferred_layout(&self, app: &App, area: Rect) -> Vec<Rect> {
        let outer_areas = Layout::horizontal([
            Constraint::Length(app.nav_menu.preferred_width()), // Sidebar
            Constraint::Min(1),                                 // Wrapper
        ])
        .split(area);
        let content_areas = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(1),                // Page content
            Constraint::Length(1),             // Hints bar
        ])
        .split(outer_areas[1]);

        vec![
            outer_areas[0],   // Sidebar
            content_areas[0], // Header
            content_areas[1], // Page content
            content_areas[2], // Hints bar
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_lines, test_app};
    use crate::ui::components::nav_menu::state::{COLLAPSED_WIDTH, EXPANDED_WIDTH, NavEvent};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(view: &mut MainView, app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).expect("terminal");
        terminal.draw(|frame| view.render(frame, frame.area(), app)).expect("draw");
        buffer_lines(terminal.backend().buffer()).join("\n")
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn routes_unknown_paths_to_not_found_and_back() {
        let mut app = test_app();
        let mut view = MainView::new(&app);

        view.set_current_page(&mut app, "/unknown");
        assert_eq!(app.page, Page::NotFound);
        assert!(draw(&mut view, &mut app).contains("Page Not Found"));

        view.set_current_page(&mut app, "/");
        assert_eq!(app.page, Page::Dashboard);
        assert!(draw(&mut view, &mut app).contains("Check"));
    }

    #[test]
    fn sidebar_width_follows_collapse_state() {
        let mut app = test_app();
        let view = MainView::new(&app);
        let area = Rect::new(0, 0, 90, 20);
        assert_eq!(view.get_preferred_layout(&app, area)[0].width, EXPANDED_WIDTH);
        app.nav_menu.apply(NavEvent::CollapseRequested);
        let layout = view.get_preferred_layout(&app, area);
        assert_eq!(layout[0].width, COLLAPSED_WIDTH);
        assert_eq!(layout[1].height, HEADER_HEIGHT);
        assert_eq!(layout[3].height, 1);
    }

    #[test]
    fn full_layout_shows_menu_header_and_hints() {
        let mut app = test_app();
        let mut view = MainView::new(&app);
        let screen = draw(&mut view, &mut app);
        for expected in ["Project Name", "Dashboard", "Users", "Settings", "The Mighty Babor Project", "Babor", "Hints:"] {
            assert!(screen.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn tab_moves_focus_and_q_quits() {
        let mut app = test_app();
        let mut view = MainView::new(&app);
        draw(&mut view, &mut app);
        view.rebuild_focus(&mut app);
        assert!(app.nav_menu.container_focus.get());

        view.handle_key_events(&mut app, key(KeyCode::Tab));
        assert!(app.dashboard.f_check.get());
        let effects = view.handle_key_events(&mut app, key(KeyCode::Enter));
        assert!(matches!(effects.as_slice(), [Effect::ShowToast(_)]));

        view.handle_key_events(&mut app, key(KeyCode::Tab));
        assert!(app.header.focus.get());

        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::Char('q'))), vec![Effect::Quit]);
    }

    #[test]
    fn open_popup_traps_keys() {
        let mut app = test_app();
        let mut view = MainView::new(&app);
        app.header.toggle_popup();

        assert!(view.handle_key_events(&mut app, key(KeyCode::Tab)).is_empty());
        assert!(app.nav_menu.container_focus.get());
        assert!(view.handle_key_events(&mut app, key(KeyCode::Char('q'))).is_empty());
        view.handle_key_events(&mut app, key(KeyCode::Esc));
        assert!(!app.header.is_popup_open());
    }
}

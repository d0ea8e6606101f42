use adminshell_types::Page;
use ratatui::{
    Frame,
    layout::{Margin, Rect},
    text::Span,
    widgets::{Borders, Paragraph},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

/// Static page showing only its title (Users, Settings, NotFound).
#[derive(Debug)]
pub struct PlaceholderPage {
    page: Page,
}

impl PlaceholderPage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

impl Component for PlaceholderPage {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let style = if self.page == Page::NotFound {
            theme.severity_style(adminshell_types::Severity::Warn)
        } else {
            theme.text_primary_style()
        };
        let title = format!(" {} ", self.page.title());
        let block = th::block(theme, Some(title.as_str()), false).borders(Borders::NONE);
        let inner = block.inner(area).inner(Margin::new(1, 0));
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(Span::styled(self.page.title(), style)), inner);
    }
}

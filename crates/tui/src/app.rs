//! Application state for the admin shell.
//!
//! `App` owns every piece of UI state: the navigation menu, the header popup,
//! the mounted page's state, live toasts and the router location. Components
//! borrow it mutably while handling events and rendering; nothing is shared
//! across tasks.

use std::time::Instant;

use adminshell_types::{Effect, Msg, Page, Toast};
use adminshell_util::{ShellConfig, UserIdentity};
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::debug;

use crate::ui::components::{DashboardState, NavMenuState, ToastState, TopHeaderState};
use crate::ui::theme::{LoadedTheme, Theme};

/// Cross-cutting context shared by every component.
#[derive(Debug)]
pub struct SharedCtx {
    /// Active UI theme
    pub theme: Box<dyn Theme>,
    /// Brand shown in the sidebar logo block
    pub project_name: String,
    /// Title shown in the top header
    pub title: String,
    /// Identity shown in the header popup
    pub user: UserIdentity,
}

/// The main application state.
pub struct App {
    pub ctx: SharedCtx,
    pub nav_menu: NavMenuState,
    pub header: TopHeaderState,
    pub dashboard: DashboardState,
    pub toasts: ToastState,
    /// Current router location as requested (not normalized)
    pub location: String,
    /// Page resolved from `location`
    pub page: Page,
    /// Global focus tree; rebuilt whenever the mounted page changes
    pub focus: Focus,
    root_focus: FocusFlag,
}

impl App {
    /// Builds the application at the index route.
    pub fn new(config: ShellConfig, theme: LoadedTheme) -> Self {
        let ShellConfig {
            project_name,
            title,
            user,
            menu,
            ..
        } = config;
        let mut app = Self {
            ctx: SharedCtx {
                theme: theme.theme,
                project_name,
                title,
                user,
            },
            nav_menu: NavMenuState::new(menu),
            header: TopHeaderState::default(),
            dashboard: DashboardState::default(),
            toasts: ToastState::default(),
            location: "/".to_string(),
            page: Page::Dashboard,
            focus: Focus::default(),
            root_focus: FocusFlag::new().with_name("root"),
        };
        app.focus = FocusBuilder::build_for(&app);
        app.focus.focus(&app.nav_menu);
        app
    }

    /// Stores `path` as the current location and resolves its page.
    pub fn navigate(&mut self, path: &str) -> Page {
        let path = path.trim();
        self.location = if path.is_empty() { "/".to_string() } else { path.to_string() };
        self.page = Page::resolve(&self.location);
        debug!(location = %self.location, page = %self.page, "navigated");
        self.page
    }

    pub fn show_toast(&mut self, toast: Toast) {
        debug!(summary = %toast.summary, "toast shown");
        self.toasts.push(toast, Instant::now());
    }

    /// Applies a system message to the state.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {
                self.toasts.expire(Instant::now());
            }
            Msg::Resize(..) => {}
        }
        Vec::new()
    }
}

impl HasFocus for App {
    /// Focus order: menu, page content, header.
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.widget(&self.nav_menu);
        if self.page == Page::Dashboard {
            builder.widget(&self.dashboard);
        }
        builder.widget(&self.header);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.root_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

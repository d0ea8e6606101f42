//! UI components: navigation menu, top header, pages, toasts.

pub mod component;
pub mod nav_menu;
pub mod pages;
pub mod toast;
pub mod top_header;

pub(crate) use component::Component;
pub use nav_menu::{NavMenuComponent, NavMenuState};
pub use pages::{DashboardComponent, DashboardState, PlaceholderPage};
pub use toast::{ToastComponent, ToastState};
pub use top_header::{TopHeaderComponent, TopHeaderState};

use ratatui::layout::Rect;

use crate::ui::utils::rect_contains;

/// Index of the area in `areas` under `x`/`y`, provided the point also lies
/// within `container`.
pub(crate) fn find_target_index_by_mouse_position(container: &Rect, areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    if !rect_contains(*container, x, y) {
        return None;
    }
    areas.iter().position(|area| rect_contains(*area, x, y))
}

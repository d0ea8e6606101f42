//! Shared type definitions for the admin shell.
//!
//! The types here are independent of any rendering technology: the menu
//! configuration model, the route table, toast descriptors, and the
//! `Msg`/`Effect` vocabulary exchanged between components and the runtime.

pub mod menu;
pub mod route;
pub mod toast;

pub use menu::{MenuConfigError, MenuEntry, MenuEntryKind, RawMenuEntry, RawSubmenuItem, SubmenuItem, default_menu, validate_menu};
pub use route::{Page, ROUTE_TABLE, normalize_path};
pub use toast::{Severity, Toast};

/// Messages that can be sent to update the application state.
///
/// These are system events that do not originate from a specific component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick (toast expiry)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
}

/// Side effects that can be triggered by state changes.
///
/// Components never act on the outside world directly; they return effects
/// and the runtime executes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Navigate the router to the given path
    Navigate(String),
    /// The user picked "Logout" from the identity menu
    Logout,
    /// Display a transient notification
    ShowToast(Toast),
    /// Leave the application
    Quit,
}

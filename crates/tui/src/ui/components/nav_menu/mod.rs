//! Collapsible side navigation menu.
//!
//! The menu has two layouts. Expanded shows the logo block with the project
//! name, a collapse control and labelled rows; containers carry an expand
//! marker and list their children beneath them while open. Collapsed shows
//! icon glyphs only. Interaction is modelled as [`state::NavEvent`]s fed to the
//! synchronous reducer [`NavMenuState::apply`], which returns navigation
//! effects for the runtime.

mod nav_menu_component;
pub(crate) mod state;

pub use nav_menu_component::NavMenuComponent;
pub use state::NavMenuState;

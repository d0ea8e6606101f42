//! UI rendering and event handling for the admin shell.
//!
//! Holds the root layout, the components it mounts, the event loop that
//! drives them, and the theme catalog.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;

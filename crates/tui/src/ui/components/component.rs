//! Component system for the admin shell.
//!
//! Components are self-contained UI elements. They own only local UI
//! behavior, render themselves into a provided `Rect`, and report side
//! effects back to the runtime as [`Effect`]s instead of acting on the
//! outside world.

use adminshell_types::{Effect, Msg};
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

/// A trait representing a UI component with its own state and behavior.
///
/// State lives on [`App`] so that focus building and the runtime can reach
/// it; the component itself holds rendering concerns only.
pub(crate) trait Component {
    /// Handle an application-level message.
    fn handle_message(&mut self, _app: &mut App, _msg: Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events routed to this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations may record the rendered areas on their state for
    /// mouse hit testing; other state changes belong in the event handlers.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hints bar while this component is focused.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }

    /// Sub-areas this component splits `area` into.
    fn get_preferred_layout(&self, _app: &App, _area: Rect) -> Vec<Rect> {
        Vec::new()
    }
}

use adminshell_types::Effect;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// Actionable items in the identity popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMenuItem {
    Logout,
}

/// State for the title bar and the identity popup.
#[derive(Debug, Clone)]
pub struct TopHeaderState {
    popup_open: bool,
    /// Focus flag of the avatar control.
    pub focus: FocusFlag,
    /// Last rendered header bar.
    pub last_area: Rect,
    /// Last rendered avatar control.
    pub avatar_area: Rect,
    /// Last rendered popup; empty while closed.
    pub popup_area: Rect,
    /// Last rendered Logout row; empty while closed.
    pub logout_area: Rect,
}

impl Default for TopHeaderState {
    fn default() -> Self {
        Self {
            popup_open: false,
            focus: FocusFlag::new().with_name("header.avatar"),
            last_area: Rect::default(),
            avatar_area: Rect::default(),
            popup_area: Rect::default(),
            logout_area: Rect::default(),
        }
    }
}

impl TopHeaderState {
    pub fn is_popup_open(&self) -> bool {
        self.popup_open
    }

    /// Opens the popup when closed and closes it when open.
    pub fn toggle_popup(&mut self) {
        self.popup_open = !self.popup_open;
        if !self.popup_open {
            self.forget_popup_areas();
        }
    }

    pub fn close_popup(&mut self) {
        self.popup_open = false;
        self.forget_popup_areas();
    }

    /// Runs a popup action. The popup closes afterwards.
    pub fn activate(&mut self, item: HeaderMenuItem) -> Vec<Effect> {
        if !self.popup_open {
            return Vec::new();
        }
        self.close_popup();
        match item {
            HeaderMenuItem::Logout => vec![Effect::Logout],
        }
    }

    fn forget_popup_areas(&mut self) {
        self.popup_area = Rect::default();
        self.logout_area = Rect::default();
    }
}

impl HasFocus for TopHeaderState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    fn area(&self) -> Rect {
        self.avatar_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_starts_closed_and_toggles() {
        let mut state = TopHeaderState::default();
        assert!(!state.is_popup_open());
        state.toggle_popup();
        assert!(state.is_popup_open());
        state.toggle_popup();
        assert!(!state.is_popup_open());
    }

    #[test]
    fn logout_emits_effect_and_closes_popup() {
        let mut state = TopHeaderState::default();
        state.toggle_popup();
        state.logout_area = Rect::new(1, 1, 10, 1);
        assert_eq!(state.activate(HeaderMenuItem::Logout), vec![Effect::Logout]);
        assert!(!state.is_popup_open());
        assert_eq!(state.logout_area, Rect::default());
    }

    #[test]
    fn actions_require_an_open_popup() {
        let mut state = TopHeaderState::default();
        assert!(state.activate(HeaderMenuItem::Logout).is_empty());
    }
}

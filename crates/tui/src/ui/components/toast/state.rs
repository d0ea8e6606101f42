use std::time::Instant;

use adminshell_types::Toast;
use ratatui::layout::Rect;

/// Oldest toasts are dropped beyond this many.
pub const MAX_VISIBLE_TOASTS: usize = 5;

/// A toast currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveToast {
    pub toast: Toast,
    pub shown_at: Instant,
}

impl LiveToast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.toast.life
    }
}

/// Ordered stack of live toasts, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ToastState {
    items: Vec<LiveToast>,
    /// Last rendered toast areas, parallel to `items()`.
    pub areas: Vec<Rect>,
}

impl ToastState {
    pub fn items(&self) -> &[LiveToast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, toast: Toast, now: Instant) {
        self.items.push(LiveToast { toast, shown_at: now });
        if self.items.len() > MAX_VISIBLE_TOASTS {
            let excess = self.items.len() - MAX_VISIBLE_TOASTS;
            self.items.drain(..excess);
        }
    }

    /// Drops expired toasts; returns whether anything was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !item.is_expired(now));
        let changed = self.items.len() != before;
        if changed {
            self.areas.clear();
        }
        changed
    }

    /// Removes the toast at `index`.
    pub fn dismiss(&mut self, index: usize) -> Option<Toast> {
        if index >= self.items.len() {
            return None;
        }
        self.areas.clear();
        Some(self.items.remove(index).toast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn toasts_expire_after_their_life() {
        let start = Instant::now();
        let mut state = ToastState::default();
        state.push(Toast::success("Success", "done"), start);
        state.push(Toast::success("Later", "done").with_life(Duration::from_secs(10)), start);

        assert!(!state.expire(start + Duration::from_millis(2999)));
        assert!(state.expire(start + Duration::from_millis(3000)));
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].toast.summary, "Later");
    }

    #[test]
    fn stack_is_bounded_and_dismissable() {
        let now = Instant::now();
        let mut state = ToastState::default();
        for index in 0..(MAX_VISIBLE_TOASTS + 2) {
            state.push(Toast::success(format!("t{index}"), ""), now);
        }
        assert_eq!(state.items().len(), MAX_VISIBLE_TOASTS);
        assert_eq!(state.items()[0].toast.summary, "t2");

        assert_eq!(state.dismiss(0).map(|toast| toast.summary), Some("t2".to_string()));
        assert!(state.dismiss(99).is_none());
    }
}

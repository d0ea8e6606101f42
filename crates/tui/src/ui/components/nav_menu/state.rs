use adminshell_types::{Effect, MenuEntry, normalize_path};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// Sidebar width in columns while expanded.
pub const EXPANDED_WIDTH: u16 = 26;
/// Sidebar width in columns while collapsed.
pub const COLLAPSED_WIDTH: u16 = 7;

/// Discrete user interactions with the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The collapse control (`◀`) was activated.
    CollapseRequested,
    /// The logo block was activated; expands a collapsed menu.
    HeaderActivated,
    /// A top-level entry was activated.
    EntryActivated(usize),
    /// A child of an open container was activated.
    SubmenuItemActivated { entry: usize, item: usize },
}

/// A row currently visible in the menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRow {
    Entry(usize),
    SubmenuItem { entry: usize, item: usize },
}

impl NavRow {
    /// Event raised when this row is activated.
    pub fn activation_event(self) -> NavEvent {
        match self {
            NavRow::Entry(index) => NavEvent::EntryActivated(index),
            NavRow::SubmenuItem { entry, item } => NavEvent::SubmenuItemActivated { entry, item },
        }
    }
}

/// State for the collapsible side menu.
///
/// `collapsed` and `open_menu_index` are only changed through [`apply`],
/// [`toggle_collapsed`] and [`toggle_submenu`]. Collapsing never clears the
/// open submenu; it is merely hidden until the menu expands again.
///
/// [`apply`]: NavMenuState::apply
/// [`toggle_collapsed`]: NavMenuState::toggle_collapsed
/// [`toggle_submenu`]: NavMenuState::toggle_submenu
#[derive(Debug, Clone)]
pub struct NavMenuState {
    /// Entries in configuration order.
    pub entries: Vec<MenuEntry>,
    collapsed: bool,
    open_menu_index: Option<usize>,
    /// Keyboard cursor, an index into [`NavMenuState::visible_rows`].
    cursor: usize,
    /// Focus flag for the menu in the global focus tree.
    pub container_focus: FocusFlag,
    /// Last rendered area of the menu; used for mouse focus and hit testing.
    pub last_area: Rect,
    /// Last rendered logo block.
    pub logo_area: Rect,
    /// Last rendered collapse control; empty while collapsed.
    pub collapse_button_area: Rect,
    /// Last rendered rows, parallel to `visible_rows()`.
    pub row_areas: Vec<Rect>,
}

impl NavMenuState {
    /// Creates an expanded menu with every submenu closed.
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self {
            entries,
            collapsed: false,
            open_menu_index: None,
            cursor: 0,
            container_focus: FocusFlag::new().with_name("nav.menu"),
            last_area: Rect::default(),
            logo_area: Rect::default(),
            collapse_button_area: Rect::default(),
            row_areas: Vec::new(),
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn open_menu_index(&self) -> Option<usize> {
        self.open_menu_index
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Columns the sidebar occupies in the current layout.
    pub fn preferred_width(&self) -> u16 {
        if self.collapsed { COLLAPSED_WIDTH } else { EXPANDED_WIDTH }
    }

    /// Whether the children of `entry` are currently shown.
    pub fn is_submenu_visible(&self, entry: usize) -> bool {
        !self.collapsed && self.open_menu_index == Some(entry)
    }

    /// Consumes one event and returns the effects it produces.
    pub fn apply(&mut self, event: NavEvent) -> Vec<Effect> {
        let focused_row = self.cursor_row();
        let effects = match event {
            NavEvent::CollapseRequested => {
                if !self.collapsed {
                    self.toggle_collapsed();
                }
                Vec::new()
            }
            NavEvent::HeaderActivated => {
                if self.collapsed {
                    self.toggle_collapsed();
                }
                Vec::new()
            }
            NavEvent::EntryActivated(index) => match self.entries.get(index) {
                Some(entry) if entry.is_container() => {
                    if !self.collapsed {
                        self.toggle_submenu(index);
                    }
                    Vec::new()
                }
                Some(entry) => entry.path().map(|path| vec![Effect::Navigate(path.to_string())]).unwrap_or_default(),
                None => Vec::new(),
            },
            NavEvent::SubmenuItemActivated { entry, item } => {
                if !self.is_submenu_visible(entry) {
                    return Vec::new();
                }
                self.entries
                    .get(entry)
                    .and_then(|e| e.submenu().get(item))
                    .map(|child| vec![Effect::Navigate(child.path.clone())])
                    .unwrap_or_default()
            }
        };
        self.retarget_cursor(focused_row);
        effects
    }

    /// Flips between the expanded and collapsed layouts.
    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Opens the submenu at `index`, or closes it when it is already open.
    /// Opening one submenu closes any other.
    pub fn toggle_submenu(&mut self, index: usize) {
        self.open_menu_index = if self.open_menu_index == Some(index) { None } else { Some(index) };
    }

    /// Rows in display order. Children follow their container only while its
    /// submenu is visible.
    pub fn visible_rows(&self) -> Vec<NavRow> {
        let mut rows = Vec::with_capacity(self.entries.len());
        for (index, entry) in self.entries.iter().enumerate() {
            rows.push(NavRow::Entry(index));
            if self.is_submenu_visible(index) {
                rows.extend((0..entry.submenu().len()).map(|item| NavRow::SubmenuItem { entry: index, item }));
            }
        }
        rows
    }

    /// Navigation target of a row, if it has one.
    pub fn row_path(&self, row: NavRow) -> Option<&str> {
        match row {
            NavRow::Entry(index) => self.entries.get(index).and_then(MenuEntry::path),
            NavRow::SubmenuItem { entry, item } => self
                .entries
                .get(entry)
                .and_then(|e| e.submenu().get(item))
                .map(|child| child.path.as_str()),
        }
    }

    /// Whether `row` links to `location`.
    pub fn is_row_active(&self, row: NavRow, location: &str) -> bool {
        self.row_path(row)
            .is_some_and(|path| normalize_path(path) == normalize_path(location))
    }

    pub fn cursor_row(&self) -> Option<NavRow> {
        self.visible_rows().get(self.cursor).copied()
    }

    /// Moves the cursor by `delta` rows, wrapping at either end.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_rows().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let len = len as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
    }

    /// Places the cursor on `row` if it is visible.
    pub fn set_cursor_row(&mut self, row: NavRow) {
        if let Some(position) = self.visible_rows().iter().position(|candidate| *candidate == row) {
            self.cursor = position;
        }
    }

    /// Activates the row under the cursor.
    pub fn activate_cursor(&mut self) -> Vec<Effect> {
        match self.cursor_row() {
            Some(row) => self.apply(row.activation_event()),
            None => Vec::new(),
        }
    }

    /// Keeps the cursor on the same logical row after the visible rows change.
    /// A hidden child falls back to its container.
    fn retarget_cursor(&mut self, previous: Option<NavRow>) {
        let rows = self.visible_rows();
        let target = match previous {
            Some(NavRow::SubmenuItem { entry, .. }) if !self.is_submenu_visible(entry) => Some(NavRow::Entry(entry)),
            other => other,
        };
        self.cursor = target
            .and_then(|row| rows.iter().position(|candidate| *candidate == row))
            .unwrap_or_else(|| self.cursor.min(rows.len().saturating_sub(1)));
    }
}

impl HasFocus for NavMenuState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adminshell_types::{MenuEntry, SubmenuItem, default_menu};

    const USERS: usize = 1;
    const SETTINGS: usize = 2;

    fn state() -> NavMenuState {
        NavMenuState::new(default_menu())
    }

    #[test]
    fn starts_expanded_with_no_open_submenu() {
        let state = state();
        assert!(!state.is_collapsed());
        assert_eq!(state.open_menu_index(), None);
        assert_eq!(state.visible_rows(), vec![NavRow::Entry(0), NavRow::Entry(1), NavRow::Entry(2)]);
    }

    #[test]
    fn users_click_twice_then_settings() {
        let mut state = state();

        assert!(state.apply(NavEvent::EntryActivated(USERS)).is_empty());
        assert_eq!(state.open_menu_index(), Some(USERS));
        let children: Vec<_> = state
            .visible_rows()
            .into_iter()
            .filter(|row| matches!(row, NavRow::SubmenuItem { .. }))
            .collect();
        assert_eq!(children.len(), 2);

        assert!(state.apply(NavEvent::EntryActivated(USERS)).is_empty());
        assert_eq!(state.open_menu_index(), None);

        let effects = state.apply(NavEvent::EntryActivated(SETTINGS));
        assert_eq!(effects, vec![Effect::Navigate("/settings".into())]);
        assert_eq!(state.open_menu_index(), None);
    }

    #[test]
    fn leaf_activation_leaves_open_submenu_alone() {
        let mut state = state();
        state.apply(NavEvent::EntryActivated(USERS));
        let effects = state.apply(NavEvent::EntryActivated(0));
        assert_eq!(effects, vec![Effect::Navigate("/".into())]);
        assert_eq!(state.open_menu_index(), Some(USERS));
    }

    /// Menu whose entry `i` is a container when bit `i` of `shape` is set.
    fn generated_menu(len: usize, shape: u32) -> Vec<MenuEntry> {
        (0..len)
            .map(|i| {
                if shape & (1 << i) != 0 {
                    let children = (0..=i % 3)
                        .map(|c| SubmenuItem::new(format!("Item {i}.{c}"), "", format!("/section{i}/{c}")))
                        .collect();
                    MenuEntry::container(format!("Group {i}"), "", children)
                } else {
                    MenuEntry::leaf(format!("Page {i}"), "", format!("/page{i}"))
                }
            })
            .collect()
    }

    #[test]
    fn at_most_one_submenu_is_open() {
        for len in 1..=5usize {
            for shape in 0..(1u32 << len) {
                let mut state = NavMenuState::new(generated_menu(len, shape));
                let mut seed = shape.wrapping_mul(2_654_435_761).wrapping_add(len as u32);
                for step in 0..48 {
                    seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                    let pick = (seed >> 16) as usize;
                    let event = match pick % 6 {
                        0 => NavEvent::CollapseRequested,
                        1 => NavEvent::HeaderActivated,
                        2 => NavEvent::SubmenuItemActivated { entry: pick % (len + 1), item: 0 },
                        _ => NavEvent::EntryActivated(pick % (len + 1)),
                    };
                    let before = state.open_menu_index();
                    let was_collapsed = state.is_collapsed();
                    state.apply(event);

                    let context = format!("len {len} shape {shape:#b} step {step} event {event:?}");
                    if let Some(open) = state.open_menu_index() {
                        assert!(state.entries[open].is_container(), "{context}");
                    }
                    let visible = (0..len).filter(|i| state.is_submenu_visible(*i)).count();
                    assert!(visible <= 1, "{context}");
                    let child_owners: std::collections::HashSet<usize> = state
                        .visible_rows()
                        .into_iter()
                        .filter_map(|row| match row {
                            NavRow::SubmenuItem { entry, .. } => Some(entry),
                            NavRow::Entry(_) => None,
                        })
                        .collect();
                    assert!(child_owners.len() <= 1, "{context}");

                    if let NavEvent::EntryActivated(index) = event
                        && index < len
                        && shape & (1 << index) != 0
                        && !was_collapsed
                    {
                        let expected = if before == Some(index) { None } else { Some(index) };
                        assert_eq!(state.open_menu_index(), expected, "{context}");
                    }
                }
            }
        }
    }

    #[test]
    fn collapse_preserves_open_submenu_and_expand_restores_it() {
        let mut state = state();
        state.apply(NavEvent::EntryActivated(USERS));

        state.apply(NavEvent::CollapseRequested);
        assert!(state.is_collapsed());
        assert_eq!(state.open_menu_index(), Some(USERS));
        assert!(!state.is_submenu_visible(USERS));
        assert_eq!(state.visible_rows().len(), 3);

        state.apply(NavEvent::HeaderActivated);
        assert!(!state.is_collapsed());
        assert_eq!(state.open_menu_index(), Some(USERS));
        assert_eq!(state.visible_rows().len(), 5);
    }

    #[test]
    fn collapse_and_expand_are_idempotent() {
        let mut state = state();
        state.apply(NavEvent::HeaderActivated);
        assert!(!state.is_collapsed());
        assert_eq!(state.preferred_width(), EXPANDED_WIDTH);
        state.apply(NavEvent::CollapseRequested);
        state.apply(NavEvent::CollapseRequested);
        assert!(state.is_collapsed());
        assert_eq!(state.preferred_width(), COLLAPSED_WIDTH);
    }

    #[test]
    fn container_activation_while_collapsed_is_a_no_op() {
        let mut state = state();
        state.apply(NavEvent::CollapseRequested);
        assert!(state.apply(NavEvent::EntryActivated(USERS)).is_empty());
        assert_eq!(state.open_menu_index(), None);

        state.apply(NavEvent::HeaderActivated);
        state.apply(NavEvent::EntryActivated(USERS));
        state.apply(NavEvent::CollapseRequested);
        state.apply(NavEvent::EntryActivated(USERS));
        assert_eq!(state.open_menu_index(), Some(USERS));
    }

    #[test]
    fn leaves_still_navigate_while_collapsed() {
        let mut state = state();
        state.apply(NavEvent::CollapseRequested);
        assert_eq!(state.apply(NavEvent::EntryActivated(SETTINGS)), vec![Effect::Navigate("/settings".into())]);
    }

    #[test]
    fn hidden_submenu_items_cannot_be_activated() {
        let mut state = state();
        let add_user = NavEvent::SubmenuItemActivated { entry: USERS, item: 1 };
        assert!(state.apply(add_user).is_empty());

        state.apply(NavEvent::EntryActivated(USERS));
        assert_eq!(state.apply(add_user), vec![Effect::Navigate("/users/add".into())]);

        state.apply(NavEvent::CollapseRequested);
        assert!(state.apply(add_user).is_empty());
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let mut state = state();
        assert!(state.apply(NavEvent::EntryActivated(42)).is_empty());
        state.apply(NavEvent::EntryActivated(USERS));
        assert!(state.apply(NavEvent::SubmenuItemActivated { entry: USERS, item: 9 }).is_empty());
        assert_eq!(state.open_menu_index(), Some(USERS));
    }

    #[test]
    fn cursor_wraps_and_activates_rows() {
        let mut state = state();
        state.move_cursor(-1);
        assert_eq!(state.cursor_row(), Some(NavRow::Entry(SETTINGS)));
        state.move_cursor(1);
        assert_eq!(state.cursor_row(), Some(NavRow::Entry(0)));

        state.move_cursor(1);
        assert!(state.activate_cursor().is_empty());
        assert_eq!(state.open_menu_index(), Some(USERS));

        state.move_cursor(2);
        assert_eq!(state.cursor_row(), Some(NavRow::SubmenuItem { entry: USERS, item: 1 }));
        assert_eq!(state.activate_cursor(), vec![Effect::Navigate("/users/add".into())]);
    }

    #[test]
    fn cursor_falls_back_to_container_when_children_hide() {
        let mut state = state();
        state.apply(NavEvent::EntryActivated(USERS));
        state.set_cursor_row(NavRow::SubmenuItem { entry: USERS, item: 0 });

        state.apply(NavEvent::CollapseRequested);
        assert_eq!(state.cursor_row(), Some(NavRow::Entry(USERS)));

        state.apply(NavEvent::HeaderActivated);
        state.set_cursor_row(NavRow::Entry(SETTINGS));
        state.apply(NavEvent::EntryActivated(USERS));
        assert_eq!(state.cursor_row(), Some(NavRow::Entry(SETTINGS)));
    }

    #[test]
    fn active_row_matches_normalized_location() {
        let mut state = state();
        state.apply(NavEvent::EntryActivated(USERS));
        assert!(state.is_row_active(NavRow::Entry(SETTINGS), "/Settings/"));
        assert!(state.is_row_active(NavRow::SubmenuItem { entry: USERS, item: 0 }, "/users?page=2"));
        assert!(!state.is_row_active(NavRow::Entry(USERS), "/users"));
        assert!(!state.is_row_active(NavRow::Entry(0), "/settings"));
    }
}

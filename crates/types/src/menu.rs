//! Navigation menu configuration.
//!
//! A menu entry is either a direct-navigation leaf or a container holding a
//! submenu of leaves. The typed model makes the "both" and "neither" shapes
//! unrepresentable; the raw records mirror the on-disk configuration format
//! and are converted with [`validate_menu`] once at startup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base directory for the bundled icon resources.
pub const ICON_DIR: &str = "/src/assets/icons";

/// A single top-level navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Display name (e.g., "Dashboard")
    pub name: String,
    /// Opaque icon resource reference (e.g., "/src/assets/icons/home.svg")
    pub icon: String,
    /// Whether the entry navigates directly or holds a submenu
    pub kind: MenuEntryKind,
}

/// What activating a [`MenuEntry`] does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntryKind {
    /// Navigates to `path` when activated.
    Leaf { path: String },
    /// Opens or closes the nested `submenu` when activated.
    Container { submenu: Vec<SubmenuItem> },
}

/// A leaf shown beneath an open container entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmenuItem {
    pub name: String,
    pub icon: String,
    pub path: String,
}

impl MenuEntry {
    pub fn leaf(name: impl Into<String>, icon: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            kind: MenuEntryKind::Leaf { path: path.into() },
        }
    }

    pub fn container(name: impl Into<String>, icon: impl Into<String>, submenu: Vec<SubmenuItem>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            kind: MenuEntryKind::Container { submenu },
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, MenuEntryKind::Container { .. })
    }

    /// Navigation target for leaf entries.
    pub fn path(&self) -> Option<&str> {
        match &self.kind {
            MenuEntryKind::Leaf { path } => Some(path),
            MenuEntryKind::Container { .. } => None,
        }
    }

    /// Children for container entries; empty for leaves.
    pub fn submenu(&self) -> &[SubmenuItem] {
        match &self.kind {
            MenuEntryKind::Leaf { .. } => &[],
            MenuEntryKind::Container { submenu } => submenu,
        }
    }
}

impl SubmenuItem {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            path: path.into(),
        }
    }
}

/// Builds an icon reference for a bundled icon file stem.
pub fn icon_path(stem: &str) -> String {
    format!("{ICON_DIR}/{stem}.svg")
}

/// The menu shipped with the shell when no configuration overrides it.
pub fn default_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::leaf("Dashboard", icon_path("home"), "/"),
        MenuEntry::container(
            "Users",
            icon_path("users"),
            vec![
                SubmenuItem::new("All Users", icon_path("users"), "/users"),
                SubmenuItem::new("Add User", icon_path("users"), "/users/add"),
            ],
        ),
        MenuEntry::leaf("Settings", icon_path("settings"), "/settings"),
    ]
}

/// On-disk shape of a menu entry.
///
/// `hasSubmenu` selects which of `path` / `submenuArray` must be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMenuEntry {
    pub menu_name: String,
    #[serde(default)]
    pub menu_icon: String,
    #[serde(default)]
    pub has_submenu: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submenu_array: Option<Vec<RawSubmenuItem>>,
}

/// On-disk shape of a submenu child.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSubmenuItem {
    pub menu_name: String,
    #[serde(default)]
    pub menu_icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Error surfaced when a menu configuration violates the leaf/container shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuConfigError {
    #[error("menu configuration is empty")]
    EmptyMenu,
    #[error("menu entry {index} has an empty name")]
    EmptyName { index: usize },
    #[error("menu entry {index} ('{name}') declares both a path and a submenu")]
    ConflictingTarget { index: usize, name: String },
    #[error("menu entry {index} ('{name}') is a submenu container without submenuArray")]
    MissingSubmenu { index: usize, name: String },
    #[error("menu entry {index} ('{name}') has no path")]
    MissingPath { index: usize, name: String },
    #[error("submenu item {child} of menu entry {index} ('{name}') has no path")]
    MissingChildPath { index: usize, child: usize, name: String },
}

impl RawMenuEntry {
    /// Converts the raw record into a typed entry, `index` being its position
    /// in the configuration list.
    pub fn validate(self, index: usize) -> Result<MenuEntry, MenuConfigError> {
        let RawMenuEntry {
            menu_name,
            menu_icon,
            has_submenu,
            path,
            submenu_array,
        } = self;
        if menu_name.trim().is_empty() {
            return Err(MenuConfigError::EmptyName { index });
        }

        let kind = match (has_submenu, path, submenu_array) {
            (true, Some(_), _) | (false, _, Some(_)) => {
                return Err(MenuConfigError::ConflictingTarget { index, name: menu_name });
            }
            (true, None, None) => return Err(MenuConfigError::MissingSubmenu { index, name: menu_name }),
            (false, None, None) => return Err(MenuConfigError::MissingPath { index, name: menu_name }),
            (false, Some(path), None) => MenuEntryKind::Leaf { path },
            (true, None, Some(children)) => {
                let mut submenu = Vec::with_capacity(children.len());
                for (child, item) in children.into_iter().enumerate() {
                    let Some(path) = item.path else {
                        return Err(MenuConfigError::MissingChildPath {
                            index,
                            child,
                            name: menu_name,
                        });
                    };
                    submenu.push(SubmenuItem::new(item.menu_name, item.menu_icon, path));
                }
                MenuEntryKind::Container { submenu }
            }
        };

        Ok(MenuEntry {
            name: menu_name,
            icon: menu_icon,
            kind,
        })
    }
}

impl From<&MenuEntry> for RawMenuEntry {
    fn from(entry: &MenuEntry) -> Self {
        let (path, submenu_array) = match &entry.kind {
            MenuEntryKind::Leaf { path } => (Some(path.clone()), None),
            MenuEntryKind::Container { submenu } => (
                None,
                Some(
                    submenu
                        .iter()
                        .map(|item| RawSubmenuItem {
                            menu_name: item.name.clone(),
                            menu_icon: item.icon.clone(),
                            path: Some(item.path.clone()),
                        })
                        .collect(),
                ),
            ),
        };
        Self {
            menu_name: entry.name.clone(),
            menu_icon: entry.icon.clone(),
            has_submenu: entry.is_container(),
            path,
            submenu_array,
        }
    }
}

/// Validates a whole configuration list, failing on the first malformed entry.
pub fn validate_menu(raw: Vec<RawMenuEntry>) -> Result<Vec<MenuEntry>, MenuConfigError> {
    if raw.is_empty() {
        return Err(MenuConfigError::EmptyMenu);
    }
    raw.into_iter().enumerate().map(|(index, entry)| entry.validate(index)).collect()
}

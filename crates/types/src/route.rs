//! Static route table.
//!
//! Paths are matched the way browser-side routers do it: segments compare
//! case-insensitively, trailing and repeated slashes are ignored, and any
//! query string or fragment is dropped before matching. Percent-encoded
//! segments are decoded before comparison. Every input resolves
//! to exactly one [`Page`]; unmatched paths land on [`Page::NotFound`].

use std::fmt;

use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use url::Url;

static BASE_URL: Lazy<Url> = Lazy::new(|| Url::parse("http://adminshell.local/").expect("static base url is valid"));

/// Pages the router can place in the content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// Index route (`/`)
    #[default]
    Dashboard,
    Users,
    Settings,
    /// Fallback for every unmatched path
    NotFound,
}

/// Ordered `(path, page)` pairs; the fallback is implicit.
pub const ROUTE_TABLE: &[(&str, Page)] = &[("/", Page::Dashboard), ("/users", Page::Users), ("/settings", Page::Settings)];

impl Page {
    /// Resolves a location to the page that renders it.
    pub fn resolve(path: &str) -> Page {
        let Some(segments) = path_segments(path) else {
            return Page::NotFound;
        };
        match segments.as_slice() {
            [] => Page::Dashboard,
            [segment] => ROUTE_TABLE
                .iter()
                .find(|(route, _)| *segment == route.trim_start_matches('/'))
                .map(|(_, page)| *page)
                .unwrap_or(Page::NotFound),
            _ => Page::NotFound,
        }
    }

    /// Canonical path for routable pages.
    pub fn path(&self) -> Option<&'static str> {
        ROUTE_TABLE.iter().find(|(_, page)| page == self).map(|(route, _)| *route)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Users => "Users",
            Page::Settings => "Settings",
            Page::NotFound => "Page Not Found",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Canonical form of a location used for active-link comparisons.
///
/// `"/Users/"`, `"users?tab=1"` and `"//users"` all normalize to `"/users"`.
pub fn normalize_path(path: &str) -> String {
    format!("/{}", path_segments(path).unwrap_or_default().join("/"))
}

fn path_segments(path: &str) -> Option<Vec<String>> {
    // Anchor at the root so "//host" is never read as a network-path reference.
    let anchored = format!("/{}", path.trim().trim_start_matches(['/', '\\']));
    let url = BASE_URL.join(&anchored).ok()?;
    let segments = url
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .map(|segment| percent_decode_str(segment).decode_utf8_lossy().to_ascii_lowercase())
        .collect();
    Some(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_route_table_exactly() {
        assert_eq!(Page::resolve("/"), Page::Dashboard);
        assert_eq!(Page::resolve("/users"), Page::Users);
        assert_eq!(Page::resolve("/settings"), Page::Settings);
    }

    #[test]
    fn unmatched_paths_fall_back_to_not_found() {
        for path in ["/unknown", "/users/add", "/settings/profile", "/dashboard", "/userss"] {
            assert_eq!(Page::resolve(path), Page::NotFound, "path {path}");
        }
    }

    #[test]
    fn matching_ignores_case_slashes_query_and_fragment() {
        assert_eq!(Page::resolve("/Users/"), Page::Users);
        assert_eq!(Page::resolve("users"), Page::Users);
        assert_eq!(Page::resolve("//settings"), Page::Settings);
        assert_eq!(Page::resolve("/settings?tab=profile#top"), Page::Settings);
        assert_eq!(Page::resolve(""), Page::Dashboard);
        assert_eq!(Page::resolve("/?welcome=1"), Page::Dashboard);
        assert_eq!(Page::resolve("/us%65rs"), Page::Users);
        assert_eq!(Page::resolve("/%53ettings"), Page::Settings);
        assert_eq!(Page::resolve("/settings%20"), Page::NotFound);
    }

    #[test]
    fn resolution_is_total() {
        let inputs = ["", "/", "%", "/a/b/c", "  /users  ", "\\settings", "?", "#", "/../users", "/üsers"];
        for input in inputs {
            let page = Page::resolve(input);
            assert!(
                matches!(page, Page::Dashboard | Page::Users | Page::Settings | Page::NotFound),
                "input {input:?}"
            );
        }
        assert_eq!(Page::resolve("/../users"), Page::Users);
    }

    #[test]
    fn canonical_paths_round_trip_through_resolve() {
        for (path, page) in ROUTE_TABLE {
            assert_eq!(page.path(), Some(*path));
            assert_eq!(Page::resolve(path), *page);
        }
        assert_eq!(Page::NotFound.path(), None);
    }

    #[test]
    fn normalizes_locations() {
        assert_eq!(normalize_path("/Users/"), "/users");
        assert_eq!(normalize_path("users?tab=1"), "/users");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/users//add"), "/users/add");
    }
}

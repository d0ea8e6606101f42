//! Content pages mounted by the router.

pub(crate) mod dashboard;
mod placeholder;

pub use dashboard::{DashboardComponent, DashboardState};
pub use placeholder::PlaceholderPage;

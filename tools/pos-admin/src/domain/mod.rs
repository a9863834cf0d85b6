//! Dashboard state.

mod app;
mod section;
mod source;

pub use app::{App, AppState, DashboardData};
pub use section::{hotkey, view_for_hotkey};
pub use source::{refresh, DashboardSource, Refresh};

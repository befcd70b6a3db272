//! Dashboard query handlers.
//!
//! Read-only handlers for the retention dashboard and its history export.

mod export_history;
mod load_dashboard;

pub use export_history::{ExportError, ExportHistoryHandler};
pub use load_dashboard::{DashboardHandler, DashboardSection, DashboardView};

//! Personal dashboard engine: independent widgets over a shared key-value
//! store, a TTL cache for provider fetches, and a capped notification log.
//! Rendering is a pure state-to-view-model projection; hosts own the actual
//! display surface.

pub mod api;
pub mod dashboard;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;
pub mod widgets;

pub use dashboard::Dashboard;
pub use models::DashboardConfig;

/// Initializes env_logger for hosts and tests; repeated calls are a no-op.
pub fn init_logging() {
    let _ = env_logger::try_init();
}

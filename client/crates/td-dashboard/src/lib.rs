//! td-dashboard
//!
//! Loads the signed-in user's projects, tasks and unread notifications as
//! three independent sections and renders them as text.

pub mod dashboard;
pub mod dashboard_data;
pub mod error;
pub mod section;

pub use dashboard::Dashboard;
pub use dashboard_data::DashboardData;
pub use error::{DashboardError, Result};
pub use section::Section;

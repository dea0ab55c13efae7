//! State Management
//!
//! KPI snapshot data model and per-dashboard reactive state.

pub mod dashboard;
pub mod snapshot;

pub use dashboard::DashboardState;
pub use snapshot::{ChartSeries, KpiSnapshot};

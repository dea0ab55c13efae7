//! UI Components
//!
//! Reusable Leptos components shared by the dashboard pages.

pub mod chart_slot;
pub mod error_banner;
pub mod kpi_card;
pub mod loading;
pub mod nav;

pub use chart_slot::ChartSlot;
pub use error_banner::ErrorBanner;
pub use kpi_card::KpiCard;
pub use loading::{InlineLoading, LoadingOverlay};
pub use nav::Nav;

//! Chart Slot Configuration
//!
//! Chart type, palette and label formatting are static per-slot data,
//! not computed logic.

/// Supported chart kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Doughnut,
    Pie,
    Bar,
    HorizontalBar,
    Line,
    Funnel,
}

/// How values are written into slice labels and axis ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValueFormat {
    #[default]
    Count,
    Percent,
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Count => {
                if value.fract().abs() < 1e-9 {
                    format!("{:.0}", value)
                } else {
                    format!("{:.1}", value)
                }
            }
            ValueFormat::Percent => format!("{:.1}%", value),
        }
    }
}

/// Static configuration of one named, independently renderable chart
/// position within a dashboard view.
#[derive(Clone, Copy)]
pub struct SlotSpec {
    /// Canvas element id this slot binds to.
    pub anchor: &'static str,
    /// Snapshot field holding the slot's series.
    pub series_field: &'static str,
    /// Section heading shown above the chart.
    pub title: &'static str,
    pub kind: ChartKind,
    pub palette: &'static [&'static str],
    pub format: ValueFormat,
}

impl SlotSpec {
    /// Palette color for entry `idx`, cycling when the series is longer
    /// than the palette.
    pub fn color(&self, idx: usize) -> &'static str {
        self.palette[idx % self.palette.len()]
    }
}

/// Color palettes carried over from the production dashboards.
pub mod palettes {
    /// Default categorical palette (stage pies, funnels).
    pub const CATEGORY: [&str; 5] =
        ["#36A2EB", "#FF6384", "#FFCE56", "#4BC0C0", "#9966FF"];

    /// Two-way split used by the property-type doughnut.
    pub const TYPE_SPLIT: [&str; 2] =
        ["rgba(54, 162, 235, 0.8)", "rgba(255, 99, 132, 0.8)"];

    /// Two-way split used by the listing-type pie.
    pub const LISTING_SPLIT: [&str; 2] =
        ["rgba(75, 192, 192, 0.8)", "rgba(255, 206, 86, 0.8)"];

    /// Per-bar colors of the current-status chart.
    pub const STATUS: [&str; 3] = [
        "rgba(255, 99, 132, 0.8)",
        "rgba(54, 162, 235, 0.8)",
        "rgba(255, 206, 86, 0.8)",
    ];

    /// Stroke and area fill of the monthly-trend line.
    pub const TREND: [&str; 2] =
        ["rgba(54, 162, 235, 1)", "rgba(54, 162, 235, 0.15)"];

    /// Single-color bars of the service-validity chart.
    pub const VALIDITY: [&str; 1] = ["rgba(75, 192, 192, 0.8)"];

    /// Single-color bars of the top-cities chart.
    pub const CITIES: [&str; 1] = ["rgba(153, 102, 255, 0.8)"];
}

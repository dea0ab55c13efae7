//! KPI Card Component
//!
//! Stat tile displaying one scalar metric from the dashboard snapshot.

use leptos::*;

use crate::charts::spec::ValueFormat;
use crate::state::dashboard::DashboardState;

/// Scalar stat tile. Shows the zeroed placeholder until the first fetch
/// lands.
#[component]
pub fn KpiCard(
    /// Snapshot field backing the tile
    field: &'static str,
    /// Display label
    label: &'static str,
    /// Value formatting, counts by default
    #[prop(optional)]
    format: ValueFormat,
) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let value = create_memo(move |_| state.snapshot.get().scalar_or_zero(field));

    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">
                {move || format.format(value.get())}
            </div>
        </div>
    }
}

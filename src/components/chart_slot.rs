//! Chart Slot Component
//!
//! Titled section holding one canvas anchor plus an HTML legend derived
//! from the slot's series and palette.

use leptos::*;

use crate::charts::spec::{ChartKind, SlotSpec};
use crate::state::dashboard::DashboardState;

/// One named, independently renderable chart position. The canvas is only
/// the anchor; drawing happens through the chart host.
#[component]
pub fn ChartSlot(spec: SlotSpec) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let series = create_memo(move |_| state.snapshot.get().series(spec.series_field));
    let show_legend = matches!(spec.kind, ChartKind::Doughnut | ChartKind::Pie);

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-lg font-semibold mb-4">{spec.title}</h2>

            <div class="relative">
                <canvas
                    id=spec.anchor
                    width="480"
                    height="260"
                    class="w-full h-64 rounded-lg"
                />
            </div>

            {show_legend.then(|| view! {
                <div class="flex justify-center flex-wrap gap-4 mt-4">
                    {move || {
                        series.get()
                            .map(|s| {
                                s.labels.iter()
                                    .enumerate()
                                    .map(|(idx, label)| {
                                        let color = spec.color(idx);
                                        view! {
                                            <div class="flex items-center space-x-2">
                                                <div
                                                    class="w-3 h-3 rounded-full"
                                                    style=format!("background-color: {}", color)
                                                />
                                                <span class="text-sm text-gray-300 capitalize">
                                                    {label.clone()}
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            })
                    }}
                </div>
            })}

            {move || {
                (series.get().is_none() && !state.loading.get()).then(|| view! {
                    <p class="text-gray-500 text-sm mt-3">"No data available"</p>
                })
            }}
        </section>
    }
}

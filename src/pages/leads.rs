//! Leads Dashboard
//!
//! Lead pipeline KPIs with tabbed chart views fed by a single
//! `get_leads_kpis` call. Switching tabs re-renders from the loaded
//! snapshot; it never re-fetches.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::api::RpcTarget;
use crate::charts::canvas::CanvasBackend;
use crate::charts::spec::{palettes, ChartKind, SlotSpec, ValueFormat};
use crate::components::{ChartSlot, ErrorBanner, InlineLoading, KpiCard, LoadingOverlay};
use crate::lifecycle::{ChartHost, TAB_RERENDER_DELAY_MS};
use crate::pages::spawn_fetch;
use crate::state::dashboard::DashboardState;

const TARGET: RpcTarget = RpcTarget {
    model: "leads.dashboard",
    method: "get_leads_kpis",
};

const OVERVIEW_TAB: usize = 0;
const PIPELINE_TAB: usize = 1;

fn stage_slot() -> SlotSpec {
    SlotSpec {
        anchor: "leadStageChart",
        series_field: "stage_chart",
        title: "Leads by Stage",
        kind: ChartKind::Pie,
        palette: &palettes::CATEGORY,
        format: ValueFormat::Count,
    }
}

fn source_slot() -> SlotSpec {
    SlotSpec {
        anchor: "leadSourceChart",
        series_field: "source_chart",
        title: "Leads by Source",
        kind: ChartKind::Bar,
        palette: &palettes::CATEGORY,
        format: ValueFormat::Count,
    }
}

fn funnel_slot() -> SlotSpec {
    SlotSpec {
        anchor: "leadFunnelChart",
        series_field: "conversion_funnel",
        title: "Conversion Funnel",
        kind: ChartKind::Funnel,
        palette: &palettes::CATEGORY,
        format: ValueFormat::Count,
    }
}

fn chart_slots() -> Vec<SlotSpec> {
    vec![stage_slot(), source_slot(), funnel_slot()]
}

/// Leads dashboard page component
#[component]
pub fn LeadsDashboard() -> impl IntoView {
    let state = DashboardState::new();
    provide_context(state);

    let host = Rc::new(RefCell::new(ChartHost::new(CanvasBackend, chart_slots())));

    let do_fetch = move || spawn_fetch(state, &TARGET);

    // Fetch once on startup
    create_effect(move |_| do_fetch());

    // Re-render the visible slots whenever a new snapshot lands; hidden
    // tab anchors are skipped until their tab mounts them.
    {
        let host = Rc::clone(&host);
        create_effect(move |_| {
            let snapshot = state.snapshot.get();
            host.borrow_mut().render_all(&snapshot);
        });
    }

    {
        let host = Rc::clone(&host);
        on_cleanup(move || host.borrow_mut().dispose());
    }

    let select_tab = {
        let host = Rc::clone(&host);
        move |tab: usize| {
            if state.selected_tab.get_untracked() == tab {
                return;
            }
            state.selected_tab.set(tab);

            // The newly shown canvases mount on the next tick; draw once
            // they have. No re-fetch on tab switch.
            let host = Rc::clone(&host);
            let snapshot = state.snapshot;
            Timeout::new(TAB_RERENDER_DELAY_MS, move || {
                host.borrow_mut().render_all(&snapshot.get_untracked());
            })
            .forget();
        }
    };

    view! {
        <div class="space-y-8">
            // Page header with refresh controls
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Leads Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Pipeline health at a glance"</p>
                </div>

                <div class="flex items-center space-x-4">
                    {move || state.last_update.get().map(|time| view! {
                        <span class="text-sm text-gray-400">{format!("Updated {}", time)}</span>
                    })}
                    {move || state.loading.get().then(|| view! { <InlineLoading /> })}
                    <button
                        on:click=move |_| do_fetch()
                        disabled=move || state.loading.get()
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm font-medium transition-colors"
                    >
                        "Refresh"
                    </button>
                </div>
            </div>

            <ErrorBanner />

            // Scalar KPI tiles
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <KpiCard field="total_leads" label="Total Leads" />
                <KpiCard field="actionable_leads" label="Actionable Today" />
            </div>

            // Tab selector
            <div class="flex space-x-2">
                <TabButton label="Overview" index=OVERVIEW_TAB on_select=select_tab.clone() />
                <TabButton label="Pipeline" index=PIPELINE_TAB on_select=select_tab.clone() />
            </div>

            // Active tab content
            <LoadingOverlay loading=state.loading>
                {move || {
                    if state.selected_tab.get() == PIPELINE_TAB {
                        view! {
                            <div class="max-w-2xl mx-auto">
                                <ChartSlot spec=funnel_slot() />
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 gap-8">
                                <ChartSlot spec=stage_slot() />
                                <ChartSlot spec=source_slot() />
                            </div>
                        }.into_view()
                    }
                }}
            </LoadingOverlay>
        </div>
    }
}

/// Tab selection button
#[component]
fn TabButton(
    label: &'static str,
    index: usize,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let is_active = create_memo(move |_| state.selected_tab.get() == index);

    view! {
        <button
            on:click=move |_| on_select.call(index)
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            {label}
        </button>
    }
}

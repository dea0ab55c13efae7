//! Listings Dashboard
//!
//! Portfolio overview: eight KPI tiles plus six chart slots fed by a
//! single `get_kpis` call.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

use crate::api::RpcTarget;
use crate::charts::canvas::CanvasBackend;
use crate::charts::spec::{palettes, ChartKind, SlotSpec, ValueFormat};
use crate::components::{ChartSlot, ErrorBanner, InlineLoading, KpiCard, LoadingOverlay};
use crate::lifecycle::ChartHost;
use crate::pages::spawn_fetch;
use crate::state::dashboard::DashboardState;

const TARGET: RpcTarget = RpcTarget {
    model: "property.dashboard",
    method: "get_kpis",
};

fn chart_slots() -> Vec<SlotSpec> {
    vec![
        SlotSpec {
            anchor: "propertyTypeChart",
            series_field: "property_type_chart",
            title: "Listings by Property Type",
            kind: ChartKind::Doughnut,
            palette: &palettes::TYPE_SPLIT,
            format: ValueFormat::Count,
        },
        SlotSpec {
            anchor: "listingTypeChart",
            series_field: "listing_type_chart",
            title: "Listings by Offer Type",
            kind: ChartKind::Pie,
            palette: &palettes::LISTING_SPLIT,
            format: ValueFormat::Count,
        },
        SlotSpec {
            anchor: "monthlyTrendChart",
            series_field: "monthly_trend_chart",
            title: "New Registrations per Month",
            kind: ChartKind::Line,
            palette: &palettes::TREND,
            format: ValueFormat::Count,
        },
        SlotSpec {
            anchor: "currentStatusChart",
            series_field: "current_status_chart",
            title: "Current Status",
            kind: ChartKind::Bar,
            palette: &palettes::STATUS,
            format: ValueFormat::Count,
        },
        SlotSpec {
            anchor: "serviceValidityChart",
            series_field: "service_validity_chart",
            title: "Service Validity",
            kind: ChartKind::Bar,
            palette: &palettes::VALIDITY,
            format: ValueFormat::Count,
        },
        SlotSpec {
            anchor: "topCitiesChart",
            series_field: "top_cities_chart",
            title: "Top Cities by Active Listings",
            kind: ChartKind::HorizontalBar,
            palette: &palettes::CITIES,
            format: ValueFormat::Count,
        },
    ]
}

/// Listings dashboard page component
#[component]
pub fn PropertyDashboard() -> impl IntoView {
    let state = DashboardState::new();
    provide_context(state);

    let host = Rc::new(RefCell::new(ChartHost::new(CanvasBackend, chart_slots())));

    let do_fetch = move || spawn_fetch(state, &TARGET);

    // Fetch once on startup
    create_effect(move |_| do_fetch());

    // Re-render every slot whenever a new snapshot lands
    {
        let host = Rc::clone(&host);
        create_effect(move |_| {
            let snapshot = state.snapshot.get();
            host.borrow_mut().render_all(&snapshot);
        });
    }

    // All widget handles go away with the component
    {
        let host = Rc::clone(&host);
        on_cleanup(move || host.borrow_mut().dispose());
    }

    view! {
        <div class="space-y-8">
            // Page header with refresh controls
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Listings Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Property portfolio at a glance"</p>
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
            <section>
                <h2 class="text-lg font-semibold mb-4">"Key Figures"</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <KpiCard field="total_listings" label="Total Listings" />
                    <KpiCard field="active_listings" label="Active Listings" />
                    <KpiCard field="sold_listings" label="Sold Listings" />
                    <KpiCard field="expired_listings" label="Expired Listings" />
                    <KpiCard field="new_this_month" label="New This Month" />
                    <KpiCard field="sold_this_month" label="Sold This Month" />
                    <KpiCard
                        field="conversion_rate"
                        label="Conversion Rate"
                        format=ValueFormat::Percent
                    />
                    <KpiCard field="expiring_soon" label="Expiring Soon" />
                </div>
            </section>

            // Chart grid
            <LoadingOverlay loading=state.loading>
                <div class="grid md:grid-cols-2 gap-8">
                    {chart_slots().into_iter().map(|slot| view! {
                        <ChartSlot spec=slot />
                    }).collect_view()}
                </div>
            </LoadingOverlay>
        </div>
    }
}

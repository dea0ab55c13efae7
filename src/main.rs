//! Propboard
//!
//! Property KPI dashboards built with Leptos (WASM).
//!
//! # Features
//!
//! - Listings dashboard: portfolio KPIs with six chart views
//! - Leads dashboard: pipeline KPIs with tabbed chart views
//! - One `call_kw` RPC fetch per dashboard, manual refresh
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Each dashboard issues a single remote call to the backend and
//! renders the returned KPI snapshot as stat tiles and canvas charts.

use leptos::*;

mod api;
mod app;
mod charts;
mod components;
mod lifecycle;
mod pages;
mod registry;
mod state;

/// Register every dashboard action. Runs once at startup, before mount;
/// the registry is read-only afterwards.
fn register_dashboards() {
    registry::register(registry::DashboardAction {
        action: "property_dashboard.dashboard",
        slug: "listings",
        label: "Listings",
        factory: || view! { <pages::PropertyDashboard /> }.into_view(),
    });

    registry::register(registry::DashboardAction {
        action: "property_dashboard.leads_dashboard",
        slug: "leads",
        label: "Leads",
        factory: || view! { <pages::LeadsDashboard /> }.into_view(),
    });
}

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    register_dashboards();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}

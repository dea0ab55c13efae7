//! Error Banner Component
//!
//! Single surface for both error channels. The stale snapshot stays
//! visible underneath; recovery is manual refresh only.

use leptos::*;

use crate::state::dashboard::DashboardState;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        {move || {
            state.error.get().map(|message| view! {
                <div class="flex items-center space-x-3 bg-red-600 text-white px-4 py-3 rounded-lg shadow-lg">
                    <span class="text-lg">"✕"</span>
                    <span class="text-sm font-medium">{message}</span>
                    <span class="text-sm text-red-200">"Refresh to try again."</span>
                </div>
            })
        }}
    }
}

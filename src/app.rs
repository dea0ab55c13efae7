//! App Root Component
//!
//! Root component wiring the router to the dashboard registry.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::registry;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/d/:slug" view=DashboardRoute />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Landing route: the first registered dashboard.
#[component]
fn Home() -> impl IntoView {
    match registry::actions().into_iter().next() {
        Some(action) => (action.factory)(),
        None => view! { <NotFound /> }.into_view(),
    }
}

/// Resolves `/d/:slug` through the dashboard registry.
#[component]
fn DashboardRoute() -> impl IntoView {
    let params = use_params_map();

    move || {
        let slug = params.with(|p| p.get("slug").cloned().unwrap_or_default());
        match registry::by_slug(&slug) {
            Some(action) => (action.factory)(),
            None => view! { <NotFound /> }.into_view(),
        }
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}

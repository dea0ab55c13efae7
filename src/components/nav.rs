//! Navigation Component
//!
//! Header navigation bar; links come from the dashboard registry.

use leptos::*;
use leptos_router::*;

use crate::registry;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let actions = registry::actions();

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🏠"</span>
                        <span class="text-xl font-bold text-white">"Propboard"</span>
                    </A>

                    // One link per registered dashboard
                    <div class="flex items-center space-x-1">
                        {actions.into_iter().map(|action| view! {
                            <A
                                href=format!("/d/{}", action.slug)
                                class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                                active_class="bg-gray-700 text-white"
                            >
                                {action.label}
                            </A>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

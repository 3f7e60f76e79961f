//! Navigation Component
//!
//! Header bar with brand and manual refresh.

use leptos::*;

use crate::state::controller::DashboardController;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let ctrl = use_context::<DashboardController>().expect("DashboardController not found");

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"🛡️"</span>
                        <div>
                            <span class="text-xl font-bold text-white">"Vigil"</span>
                            <span class="text-gray-400 text-sm ml-2 hidden md:inline">
                                "Fall Detection Monitoring"
                            </span>
                        </div>
                    </div>

                    // Manual refresh
                    <button
                        on:click=move |_| ctrl.refresh()
                        class="px-4 py-2 rounded-lg text-sm font-medium bg-gray-700 text-gray-300
                               hover:bg-gray-600 hover:text-white transition-colors"
                    >
                        "Refresh"
                    </button>
                </div>
            </div>
        </nav>
    }
}

//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{LoadingSpinner, Nav, Toast, VideoModal};
use crate::pages::Dashboard;
use crate::state::controller::DashboardController;
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::refresh::init_auto_refresh;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let controller = DashboardController::new(state);
    provide_context(controller.clone());

    // First paint on mount
    let ctrl_for_effect = controller.clone();
    create_effect(move |_| {
        ctrl_for_effect.refresh();
    });

    // Periodic refresh, paused while the page is hidden
    init_auto_refresh(controller);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with refresh status
                <Footer />

                // Overlays
                <Toast />
                <VideoModal />
                <LoadingSpinner />
            </div>
        </Router>
    }
}

/// Footer component showing last refresh time and loading state
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">
                    "Auto-refresh every 30s while visible"
                </div>

                // Last updated time
                <div class="text-gray-400">
                    "Last updated: "
                    <span id="lastUpdated">
                        {move || {
                            state
                                .last_updated
                                .get()
                                .and_then(|ts| chrono::DateTime::from_timestamp_millis(ts))
                                .map(|dt| {
                                    dt.with_timezone(&chrono::Local).format("%H:%M:%S").to_string()
                                })
                                .unwrap_or_else(|| "—".to_string())
                        }}
                    </span>
                </div>

                // Loading indicator
                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-blue-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
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
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}

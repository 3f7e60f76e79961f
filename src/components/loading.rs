//! Loading Component
//!
//! Global loading indicator shown while requests are in flight.

use leptos::*;

use crate::state::global::GlobalState;

/// Floating loading badge, visible whenever the global loading flag is set.
/// Visibility is driven only by that flag, so it always resets with it.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div
            id="loadingSpinner"
            class=move || {
                if state.loading.get() {
                    "fixed top-5 left-1/2 -translate-x-1/2 z-50 flex items-center space-x-2 \
                     bg-gray-800 border border-gray-700 rounded-lg px-4 py-2 shadow-lg"
                } else {
                    "hidden"
                }
            }
        >
            <div class="loading-spinner w-4 h-4" />
            <span class="text-sm text-gray-300">"Loading..."</span>
        </div>
    }
}

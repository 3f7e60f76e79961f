//! Toast Notification Component
//!
//! Transient error banner; messages auto-dismiss after 5 seconds and can
//! be dismissed by hand.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed top-5 right-4 z-50 space-y-2">
            {move || {
                let state = state.clone();
                state.error.get().map(|msg| {
                    let state_for_dismiss = state.clone();
                    view! {
                        <div class="flex items-center space-x-3 bg-red-600 text-white px-4 py-3 \
                                    rounded-lg shadow-lg min-w-[300px] animate-slide-in">
                            <span class="text-sm font-medium flex-1">{msg}</span>
                            <button
                                on:click=move |_| state_for_dismiss.clear_error()
                                class="text-white/70 hover:text-white"
                            >
                                "✕"
                            </button>
                        </div>
                    }
                })
            }}
        </div>
    }
}

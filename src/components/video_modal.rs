//! Video Playback Modal
//!
//! Modal dialog playing the video attached to a fall record.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::state::global::GlobalState;

/// Video modal, rendered while a playback source is set.
///
/// Closing pauses the video and clears its source so a detached element
/// cannot keep playing. Escape closes too.
#[component]
pub fn VideoModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let video_ref = create_node_ref::<html::Video>();

    // Escape key closes the modal, registered once for the document
    {
        let state_for_key = state.clone();
        let on_keydown = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            if event.key() == "Escape" {
                if let Some(video) = video_ref.get_untracked() {
                    let _ = video.pause();
                    video.set_src("");
                }
                state_for_key.close_video();
            }
        }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
        on_keydown.forget();
    }

    view! {
        {move || {
            let state = state.clone();
            state.video_modal.get().map(|playback| {
                let state_for_close = state.clone();
                let on_close = move |_| {
                    if let Some(video) = video_ref.get_untracked() {
                        let _ = video.pause();
                        video.set_src("");
                    }
                    state_for_close.close_video();
                };

                view! {
                    <div
                        id="videoModal"
                        class="fixed inset-0 bg-black/60 flex items-center justify-center z-50"
                    >
                        <div class="bg-gray-800 rounded-xl p-6 w-full max-w-2xl mx-4">
                            <div class="flex items-center justify-between mb-4">
                                <h2 class="text-xl font-semibold">"Fall Video"</h2>
                                <button
                                    on:click=on_close
                                    class="text-gray-400 hover:text-white text-lg"
                                >
                                    "✕"
                                </button>
                            </div>

                            <video
                                id="fallVideo"
                                node_ref=video_ref
                                src=playback.src.clone()
                                controls=true
                                autoplay=true
                                class="w-full rounded-lg bg-black"
                            />

                            <p id="videoInfo" class="text-gray-400 text-sm mt-3">
                                {playback.info.clone()}
                            </p>
                        </div>
                    </div>
                }
            })
        }}
    }
}

//! Auto-Refresh Loop
//!
//! Periodic dashboard refresh, paused while the page is hidden.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::controller::DashboardController;

/// Default refresh interval
pub const REFRESH_INTERVAL_MS: u32 = 30_000;

/// Start the auto-refresh timer and tie it to page visibility: the timer
/// stops when the document is hidden and restarts when it becomes visible
/// again. Call once from the app root.
pub fn init_auto_refresh(ctrl: DashboardController) {
    ctrl.start_auto_refresh(REFRESH_INTERVAL_MS);

    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };

    let ctrl_for_visibility = ctrl;
    let on_visibility = Closure::wrap(Box::new(move || {
        let hidden = web_sys::window()
            .and_then(|w| w.document())
            .map(|d| d.hidden())
            .unwrap_or(false);

        if hidden {
            ctrl_for_visibility.stop_auto_refresh();
        } else {
            ctrl_for_visibility.start_auto_refresh(REFRESH_INTERVAL_MS);
        }
    }) as Box<dyn FnMut()>);

    if document
        .add_event_listener_with_callback("visibilitychange", on_visibility.as_ref().unchecked_ref())
        .is_err()
    {
        web_sys::console::error_1(&"Failed to register visibilitychange listener".into());
    }
    on_visibility.forget();
}

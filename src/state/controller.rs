//! Dashboard Controller
//!
//! Owns the refresh cycle, pagination, video playback and the auto-refresh
//! timer. All mutation of [`GlobalState`] flows through these methods.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures_util::future::join;
use gloo_timers::callback::Interval;
use leptos::*;

use crate::api;
use crate::state::global::{GlobalState, PER_PAGE};

/// Monotonic tag for falls requests. A response is applied only when its
/// tag is still the latest issued, so overlapping page loads resolve
/// last-request-wins by issuance order rather than resolution order.
#[derive(Clone, Default)]
struct RequestSeq(Rc<Cell<u64>>);

impl RequestSeq {
    /// Issue the next tag, superseding all earlier ones
    fn next(&self) -> u64 {
        let tag = self.0.get() + 1;
        self.0.set(tag);
        tag
    }

    /// Whether `tag` is still the most recently issued
    fn is_current(&self, tag: u64) -> bool {
        self.0.get() == tag
    }
}

/// `load_page` guard: pages are 1-based and bounded by the current total
fn page_in_bounds(page: u32, total_pages: u32) -> bool {
    page >= 1 && page <= total_pages
}

/// Whether a video reference is already a playable URL, as opposed to an
/// opaque storage key that needs a signed-URL lookup
fn is_direct_url(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// Dashboard controller provided to the component tree alongside the state
#[derive(Clone)]
pub struct DashboardController {
    pub state: GlobalState,
    falls_seq: RequestSeq,
    timer: Rc<RefCell<Option<Interval>>>,
}

impl DashboardController {
    pub fn new(state: GlobalState) -> Self {
        Self {
            state,
            falls_seq: RequestSeq::default(),
            timer: Rc::new(RefCell::new(None)),
        }
    }

    /// Re-fetch stats and the current falls page, then apply both.
    ///
    /// The two requests are issued concurrently and both awaited; nothing
    /// is rendered from only one of them. On any failure the previously
    /// rendered state is left untouched and a transient error is shown.
    /// The loading indicator is reset on every path.
    pub fn refresh(&self) {
        let ctrl = self.clone();
        spawn_local(async move {
            ctrl.state.loading.set(true);

            let page = ctrl.state.page.get_untracked();
            let tag = ctrl.falls_seq.next();

            let (stats, falls) = join(api::fetch_stats(), api::fetch_falls(page, PER_PAGE)).await;

            match (stats, falls) {
                (Ok(stats), Ok(falls)) => {
                    ctrl.state.stats.set(Some(stats));
                    if ctrl.falls_seq.is_current(tag) {
                        ctrl.apply_falls_page(falls);
                    }
                    ctrl.state.mark_updated();
                }
                (Err(e), _) | (_, Err(e)) => {
                    web_sys::console::error_1(&format!("Error refreshing data: {}", e).into());
                    ctrl.state.show_error("Failed to refresh data");
                }
            }

            ctrl.state.loading.set(false);
        });
    }

    /// Fetch and apply one falls page. No-op when `page` is out of bounds.
    /// Stats and charts are not touched.
    pub fn load_page(&self, page: u32) {
        if !page_in_bounds(page, self.state.total_pages.get_untracked()) {
            return;
        }

        let ctrl = self.clone();
        spawn_local(async move {
            ctrl.state.loading.set(true);

            let tag = ctrl.falls_seq.next();

            match api::fetch_falls(page, PER_PAGE).await {
                Ok(falls) => {
                    if ctrl.falls_seq.is_current(tag) {
                        ctrl.apply_falls_page(falls);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error loading page: {}", e).into());
                    ctrl.state.show_error("Failed to load page");
                }
            }

            ctrl.state.loading.set(false);
        });
    }

    /// Resolve a video reference and open the playback modal.
    ///
    /// Absolute HTTP(S) references play directly; anything else is treated
    /// as a storage key and exchanged for a signed URL. A missing `url` in
    /// the lookup response keeps the modal closed and reports the video as
    /// unavailable.
    pub fn play_video(&self, reference: String, fall_id: String) {
        let ctrl = self.clone();
        spawn_local(async move {
            ctrl.state.loading.set(true);

            if is_direct_url(&reference) {
                let info = format!("Fall ID: {} | Video: Direct URL", fall_id);
                ctrl.state.open_video(reference.clone(), info);
            } else {
                match api::fetch_video_url(&reference).await {
                    Ok(Some(url)) => {
                        let info = format!("Fall ID: {} | Video: {}", fall_id, reference);
                        ctrl.state.open_video(url, info);
                    }
                    Ok(None) => {
                        ctrl.state.show_error("Video not available");
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Error loading video: {}", e).into());
                        ctrl.state.show_error("Failed to load video");
                    }
                }
            }

            ctrl.state.loading.set(false);
        });
    }

    /// Open the fall detail view in a new browsing context
    pub fn view_detail(fall_id: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(&format!("/fall/{}", fall_id), "_blank");
        }
    }

    /// Start the auto-refresh timer, cancelling any existing one first.
    /// At most one timer is ever active.
    pub fn start_auto_refresh(&self, interval_ms: u32) {
        self.stop_auto_refresh();

        let ctrl = self.clone();
        let interval = Interval::new(interval_ms, move || {
            ctrl.refresh();
        });
        *self.timer.borrow_mut() = Some(interval);
    }

    /// Stop the auto-refresh timer, if one is running
    pub fn stop_auto_refresh(&self) {
        if let Some(timer) = self.timer.borrow_mut().take() {
            timer.cancel();
        }
    }

    /// Apply a falls page to the table and pagination state
    fn apply_falls_page(&self, falls_page: api::FallsPage) {
        let total_pages = if falls_page.per_page == 0 {
            0
        } else {
            (falls_page.total + falls_page.per_page - 1) / falls_page.per_page
        };

        self.state.falls.set(falls_page.falls);
        self.state.page.set(falls_page.page);
        self.state.total_pages.set(total_pages);
        self.state.total_records.set(falls_page.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_in_bounds() {
        assert!(page_in_bounds(1, 3));
        assert!(page_in_bounds(3, 3));
        assert!(!page_in_bounds(0, 3));
        assert!(!page_in_bounds(4, 3));
        assert!(!page_in_bounds(1, 0));
    }

    #[test]
    fn test_is_direct_url() {
        assert!(is_direct_url("https://cdn.example/v.mp4"));
        assert!(is_direct_url("http://cdn.example/v.mp4"));
        assert!(!is_direct_url("abc123"));
        assert!(!is_direct_url("videos/fall_3.mp4"));
    }

    #[test]
    fn test_request_seq_last_issued_wins() {
        let seq = RequestSeq::default();
        let first = seq.next();
        let second = seq.next();

        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}

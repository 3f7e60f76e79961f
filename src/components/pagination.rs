//! Pagination Component
//!
//! Page controls and the visible record range for the falls table.

use leptos::*;

use crate::state::controller::DashboardController;
use crate::state::global::{GlobalState, PER_PAGE};

/// Pure pagination math for one page of a record set
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageInfo {
    /// Current page, 1-based
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
}

impl PageInfo {
    /// Total page count, `ceil(total / per_page)`
    pub fn total_pages(&self) -> u32 {
        if self.per_page == 0 {
            0
        } else {
            (self.total + self.per_page - 1) / self.per_page
        }
    }

    /// Displayed record range as `(start, end)`, 1-based inclusive
    pub fn record_range(&self) -> (u32, u32) {
        let start = (self.page - 1) * self.per_page + 1;
        let end = (self.page * self.per_page).min(self.total);
        (start, end)
    }

    /// Up to five page numbers centered on the current page, clamped to
    /// `[1, total_pages]`. Empty when there are no pages.
    pub fn page_window(&self) -> Vec<u32> {
        let total_pages = self.total_pages();
        let start = self.page.saturating_sub(2).max(1);
        let end = (self.page + 2).min(total_pages);
        (start..=end).collect()
    }
}

/// Pagination bar: record range, previous/next and the page-number window
#[component]
pub fn Pagination() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let ctrl = use_context::<DashboardController>().expect("DashboardController not found");

    let info = {
        let state = state.clone();
        create_memo(move |_| PageInfo {
            page: state.page.get(),
            per_page: PER_PAGE,
            total: state.total_records.get(),
        })
    };

    let ctrl_prev = ctrl.clone();
    let ctrl_next = ctrl.clone();
    let ctrl_pages = ctrl;

    view! {
        <div class="flex flex-col md:flex-row items-center justify-between gap-4 mt-4">
            // Record range
            <div class="text-sm text-gray-400">
                "Showing "
                <span id="recordsInfo">
                    {move || {
                        let (start, end) = info.get().record_range();
                        format!("{}-{}", start, end)
                    }}
                </span>
                " of "
                <span id="totalRecords">{move || info.get().total}</span>
                " falls"
            </div>

            // Page controls
            <ul id="pagination" class="flex items-center space-x-1">
                <li>
                    <button
                        on:click=move |_| {
                            let page = info.get_untracked().page;
                            ctrl_prev.load_page(page.saturating_sub(1));
                        }
                        disabled=move || info.get().page <= 1
                        class="px-3 py-2 rounded-lg text-sm bg-gray-700 text-gray-300
                               hover:bg-gray-600 disabled:opacity-40 disabled:hover:bg-gray-700
                               transition-colors"
                    >
                        "‹"
                    </button>
                </li>

                {move || {
                    let current = info.get();
                    current
                        .page_window()
                        .into_iter()
                        .map(|page| {
                            let ctrl_page = ctrl_pages.clone();
                            let class = if page == current.page {
                                "px-3 py-2 rounded-lg text-sm bg-blue-600 text-white"
                            } else {
                                "px-3 py-2 rounded-lg text-sm bg-gray-700 text-gray-300 \
                                 hover:bg-gray-600 transition-colors"
                            };
                            view! {
                                <li>
                                    <button
                                        on:click=move |_| ctrl_page.load_page(page)
                                        class=class
                                    >
                                        {page}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}

                <li>
                    <button
                        on:click=move |_| {
                            let current = info.get_untracked();
                            ctrl_next.load_page(current.page + 1);
                        }
                        disabled=move || {
                            let current = info.get();
                            current.page >= current.total_pages()
                        }
                        class="px-3 py-2 rounded-lg text-sm bg-gray-700 text-gray-300
                               hover:bg-gray-600 disabled:opacity-40 disabled:hover:bg-gray-700
                               transition-colors"
                    >
                        "›"
                    </button>
                </li>
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let info = PageInfo { page: 1, per_page: 10, total: 35 };
        assert_eq!(info.total_pages(), 4);

        let exact = PageInfo { page: 1, per_page: 10, total: 30 };
        assert_eq!(exact.total_pages(), 3);

        let empty = PageInfo { page: 1, per_page: 10, total: 0 };
        assert_eq!(empty.total_pages(), 0);
    }

    #[test]
    fn test_record_range() {
        let info = PageInfo { page: 2, per_page: 10, total: 35 };
        assert_eq!(info.record_range(), (11, 20));

        // last page is short
        let last = PageInfo { page: 4, per_page: 10, total: 35 };
        assert_eq!(last.record_range(), (31, 35));

        let first = PageInfo { page: 1, per_page: 10, total: 35 };
        assert_eq!(first.record_range(), (1, 10));
    }

    #[test]
    fn test_page_window_centered() {
        let info = PageInfo { page: 5, per_page: 10, total: 100 };
        assert_eq!(info.page_window(), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_page_window_clamped_at_edges() {
        let start = PageInfo { page: 1, per_page: 10, total: 100 };
        assert_eq!(start.page_window(), vec![1, 2, 3]);

        let end = PageInfo { page: 10, per_page: 10, total: 100 };
        assert_eq!(end.page_window(), vec![8, 9, 10]);

        let tiny = PageInfo { page: 1, per_page: 10, total: 15 };
        assert_eq!(tiny.page_window(), vec![1, 2]);
    }

    #[test]
    fn test_page_window_empty_when_no_records() {
        let info = PageInfo { page: 1, per_page: 10, total: 0 };
        assert!(info.page_window().is_empty());
    }
}

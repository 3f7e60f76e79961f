//! Stat Card Components
//!
//! The four summary cards: today, this week, this month, total.

use leptos::*;

use crate::state::global::GlobalState;

/// Summary card row. Order matters: today / week / month / total.
#[component]
pub fn StatCards() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_today = state.clone();
    let state_week = state.clone();
    let state_month = state.clone();
    let state_total = state;

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <StatCard
                label="Today"
                value=Signal::derive(move || state_today.stats.get().map(|s| s.today))
            />
            <StatCard
                label="This Week"
                value=Signal::derive(move || state_week.stats.get().map(|s| s.this_week))
            />
            <StatCard
                label="This Month"
                value=Signal::derive(move || state_month.stats.get().map(|s| s.this_month))
            />
            <StatCard
                label="Total Falls"
                value=Signal::derive(move || state_total.stats.get().map(|s| s.total))
            />
        </div>
    }
}

/// Single stat card; shows a dash until the first snapshot arrives
#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<Option<u32>>,
) -> impl IntoView {
    view! {
        <div class="stat-card bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            <span class="text-gray-400 text-sm">{label}</span>
            <h4 class="text-3xl font-bold mt-2">
                {move || {
                    value
                        .get()
                        .map(|v| v.to_string())
                        .unwrap_or_else(|| "—".to_string())
                }}
            </h4>
        </div>
    }
}

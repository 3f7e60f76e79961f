//! Dashboard Page
//!
//! Main view: stat cards, charts, and the falls table with pagination.

use leptos::*;

use crate::components::{
    FallsTable, LocationChart, Pagination, SeverityChart, StatCards, TimelineChart,
};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Detected falls at a glance"</p>
                </div>
            </div>

            // Summary cards
            <section>
                <StatCards />
            </section>

            // Charts
            <div class="grid lg:grid-cols-3 gap-8">
                <section class="bg-gray-800 rounded-xl p-6 lg:col-span-2">
                    <h2 class="text-xl font-semibold mb-4">"Falls - Last 30 Days"</h2>
                    <TimelineChart />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"By Severity"</h2>
                    <SeverityChart />
                </section>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"By Location"</h2>
                <LocationChart />
            </section>

            // Event table
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Recent Falls"</h2>
                <FallsTable />
                <Pagination />
            </section>
        </div>
    }
}

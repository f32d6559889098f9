use crate::dashboards::DailySalesDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <DailySalesDashboard />
        </main>
    }
}

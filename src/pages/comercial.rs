//! Seller-facing dashboard with the day's routes and visits.

use leptos::prelude::*;

#[component]
pub fn ComercialPage() -> impl IntoView {
    view! {
        <div class="comercial-page">
            <header class="comercial-page__header">
                <h1>"My routes"</h1>
            </header>
        </div>
    }
}

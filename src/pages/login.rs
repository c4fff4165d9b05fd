//! Login page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routing::table::REGISTER_PATH;
use crate::util::navigation::use_route_href;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Salesmen Tracker"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <A href=use_route_href(REGISTER_PATH)>"Create an account"</A>
            </div>
        </div>
    }
}

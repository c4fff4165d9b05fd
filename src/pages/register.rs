//! Registration page. Reachable while signed in so users can switch accounts.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routing::table::LOGIN_PATH;
use crate::util::navigation::use_route_href;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create account"</h1>
                <A href=use_route_href(LOGIN_PATH)>"Back to sign in"</A>
            </div>
        </div>
    }
}

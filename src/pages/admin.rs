//! Admin overview and seller management pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routing::table::{ADMIN_MANAGEMENT_PATH, ADMIN_PATH};
use crate::util::navigation::use_route_href;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Admin"</h1>
                <A href=use_route_href(ADMIN_MANAGEMENT_PATH)>"Manage sellers"</A>
            </header>
        </div>
    }
}

/// Seller management, invitations, client directory, and zones.
#[component]
pub fn AdminManagementPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Management"</h1>
                <A href=use_route_href(ADMIN_PATH)>"Back"</A>
            </header>
        </div>
    }
}

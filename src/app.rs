//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::config::AppConfig;
use crate::pages::view_for;
use crate::routing::guard::NavigationGuard;
use crate::routing::table::{
    ADMIN_MANAGEMENT_PATH, ADMIN_PATH, COMERCIAL_PATH, LOGIN_PATH, REGISTER_PATH, ROOT_PATH, RouteTable, RouteTarget,
};
use crate::state::session::{self, TokenStore};
use crate::util::navigation::{href_for, install_navigation_guard};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the route table and guard from config, provides them with the token
/// store as context, and mounts the router under the configured base.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        log::error!("config: {e}; falling back to defaults");
        AppConfig::default()
    });

    let table = RouteTable::standard(config.base_path.clone());
    let guard = Arc::new(NavigationGuard::new(table, config.policy.clone()));
    let store = session::default_store();
    let stylesheet = href_for(&config.base_path, "/pkg/salestrack.css");

    provide_context(guard);
    provide_context(store);

    view! {
        <Stylesheet id="leptos" href=stylesheet/>
        <Title text="Salesmen Tracker"/>

        <Router base=config.base_path>
            <GuardHost/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <TableView path=ROOT_PATH/> }/>
                <Route path=StaticSegment("login") view=|| view! { <TableView path=LOGIN_PATH/> }/>
                <Route path=StaticSegment("registro") view=|| view! { <TableView path=REGISTER_PATH/> }/>
                <Route path=StaticSegment("admin") view=|| view! { <TableView path=ADMIN_PATH/> }/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("gestion"))
                    view=|| view! { <TableView path=ADMIN_MANAGEMENT_PATH/> }
                />
                <Route path=StaticSegment("comercial") view=|| view! { <TableView path=COMERCIAL_PATH/> }/>
            </Routes>
        </Router>
    }
}

/// Installs the navigation guard; must sit inside `<Router>`.
#[component]
fn GuardHost() -> impl IntoView {
    let guard = expect_context::<Arc<NavigationGuard>>();
    let store = expect_context::<Arc<dyn TokenStore>>();
    install_navigation_guard(guard, store, use_location().pathname, use_navigate());
}

/// Render whatever the route table binds to `path`.
#[component]
fn TableView(path: &'static str) -> impl IntoView {
    let guard = expect_context::<Arc<NavigationGuard>>();
    match guard.table().lookup(path).map(|entry| entry.target.clone()) {
        Some(RouteTarget::View(view)) => view_for(view),
        Some(RouteTarget::Redirect(to)) => view! { <Redirect path=to/> }.into_any(),
        None => "Page not found.".into_any(),
    }
}

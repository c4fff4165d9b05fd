//! Router glue enacting navigation guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos has no `beforeEach` hook, so the guard runs as an effect on the
//! current pathname. Every change produces one [`NavigationRequest`], one read
//! of the token store, and at most one replacing navigation.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routing::guard::{Decision, NavigationGuard, NavigationRequest};
use crate::state::session::TokenStore;

/// Request for moving from `previous` (none on first load) to `target`.
#[must_use]
pub fn navigation_request(previous: Option<&str>, target: &str) -> NavigationRequest {
    NavigationRequest { target_path: target.to_owned(), current_path: previous.unwrap_or_default().to_owned() }
}

/// Strip the mount prefix from a browser pathname. The bare prefix maps to `/`;
/// pathnames outside the prefix are returned unchanged.
#[must_use]
pub fn route_path<'a>(pathname: &'a str, base: &str) -> &'a str {
    if base.is_empty() {
        return pathname;
    }
    match pathname.strip_prefix(base) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => pathname,
    }
}

/// Browser pathname for a route path under `base`. Used for `href`s and
/// assets, which the router does not resolve; `navigate` and `<Redirect>`
/// take plain route paths and add the base themselves.
#[must_use]
pub fn href_for(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_owned();
    }
    match path {
        "/" => base.to_owned(),
        _ => format!("{base}{path}"),
    }
}

/// Route path to hand to the router's `navigate` for a guard decision.
#[must_use]
pub fn navigate_target(decision: &Decision) -> Option<&str> {
    decision.redirect_path()
}

/// Mounted `href` for `path`, using the base of the guard in context.
pub fn use_route_href(path: &str) -> String {
    let base = use_context::<Arc<NavigationGuard>>()
        .map(|guard| guard.table().base_path().to_owned())
        .unwrap_or_default();
    href_for(&base, path)
}

/// Run `guard` on every pathname change and follow any redirect it returns.
pub fn install_navigation_guard<F>(
    guard: Arc<NavigationGuard>,
    store: Arc<dyn TokenStore>,
    pathname: Memo<String>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move |previous: Option<String>| {
        let base = guard.table().base_path();
        let target = route_path(&pathname.get(), base).to_owned();
        let request = navigation_request(previous.as_deref(), &target);
        let decision = guard.check(&request, store.as_ref());
        if let Some(path) = navigate_target(&decision) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        target
    });
}

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are bound to routes through [`ViewId`]; the route table never
//! references components directly.

pub mod admin;
pub mod comercial;
pub mod login;
pub mod register;

use leptos::prelude::*;

use crate::routing::table::ViewId;
use admin::{AdminManagementPage, AdminPage};
use comercial::ComercialPage;
use login::LoginPage;
use register::RegisterPage;

/// Render the page bound to `view`.
pub fn view_for(view: ViewId) -> AnyView {
    match view {
        ViewId::Login => view! { <LoginPage/> }.into_any(),
        ViewId::Register => view! { <RegisterPage/> }.into_any(),
        ViewId::Admin => view! { <AdminPage/> }.into_any(),
        ViewId::AdminManagement => view! { <AdminManagementPage/> }.into_any(),
        ViewId::Comercial => view! { <ComercialPage/> }.into_any(),
    }
}

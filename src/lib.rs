//! # salestrack-web
//!
//! Leptos + WASM frontend for the Salesmen Tracker field-sales application.
//!
//! The crate owns route-based access control (a static route table and a
//! navigation guard gated by the stored session token) and the analytics
//! forwarder pages use to report check-ins, visits, and failures. Page
//! content is deliberately thin; the backend API lives elsewhere.

pub mod analytics;
pub mod app;
pub mod config;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}

/// Hook for the page's web-vitals script: `report_web_vital("LCP", 1234.5)`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn report_web_vital(name: &str, value: f64) {
    let metric = match name {
        "CLS" => analytics::vitals::Metric::Cls,
        "FID" => analytics::vitals::Metric::Fid,
        "FCP" => analytics::vitals::Metric::Fcp,
        "LCP" => analytics::vitals::Metric::Lcp,
        "TTFB" => analytics::vitals::Metric::Ttfb,
        other => {
            log::warn!("unknown web vital: {other}");
            return;
        }
    };
    let enabled = config::AppConfig::from_env().map_or(true, |cfg| cfg.analytics_enabled);
    if enabled {
        analytics::Analytics::default().report_web_vital(&analytics::vitals::WebVital { metric, value });
    }
}

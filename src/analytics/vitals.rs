//! Core Web Vitals reporting.
//!
//! Measurement happens in the page's web-vitals script; this module only
//! formats and traces the values it hands over.

#[cfg(test)]
#[path = "vitals_test.rs"]
mod vitals_test;

use serde::{Deserialize, Serialize};

use super::{Analytics, TraceLevel};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Metric {
    Cls,
    Fid,
    Fcp,
    Lcp,
    Ttfb,
}

impl Metric {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cls => "CLS",
            Self::Fid => "FID",
            Self::Fcp => "FCP",
            Self::Lcp => "LCP",
            Self::Ttfb => "TTFB",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WebVital {
    #[serde(rename = "name")]
    pub metric: Metric,
    pub value: f64,
}

impl WebVital {
    /// Console line for this measurement. CLS is unitless, the rest are ms.
    #[must_use]
    pub fn format(&self) -> String {
        match self.metric {
            Metric::Cls => format!("[Web Vital] CLS: {:.3}", self.value),
            other => format!("[Web Vital] {}: {:.2}ms", other.as_str(), self.value),
        }
    }
}

impl Analytics {
    /// Trace one web vital measurement. Vitals are never forwarded.
    pub fn report_web_vital(&self, vital: &WebVital) {
        let fields = serde_json::to_value(vital).unwrap_or_default();
        self.trace(TraceLevel::Info, &vital.format(), &fields);
    }
}

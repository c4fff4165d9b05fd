//! Event recorders that fan out to the analytics port and the local trace.

#[cfg(test)]
#[path = "forwarder_test.rs"]
mod forwarder_test;

use serde_json::json;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::{AnalyticsPort, DiagnosticSink, Event, ForwardError, LogSink, TraceLevel};

/// Forwards typed events to an optional port and traces each one locally.
pub struct Analytics {
    port: Option<Box<dyn AnalyticsPort>>,
    sink: Box<dyn DiagnosticSink>,
    clock: fn() -> OffsetDateTime,
}

impl Default for Analytics {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Analytics {
    /// Forwarder tracing through the `log` facade.
    #[must_use]
    pub fn new(port: Option<Box<dyn AnalyticsPort>>) -> Self {
        Self::with_sink(port, Box::new(LogSink))
    }

    #[must_use]
    pub fn with_sink(port: Option<Box<dyn AnalyticsPort>>, sink: Box<dyn DiagnosticSink>) -> Self {
        Self { port, sink, clock: OffsetDateTime::now_utc }
    }

    /// Replace the capture clock.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> OffsetDateTime) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn has_port(&self) -> bool {
        self.port.is_some()
    }

    /// Build the payload, forward it, then trace. Exactly one trace per call:
    /// the event itself, or the forwarding error when the port fails. A port
    /// whose collaborator is missing counts as no port.
    pub fn record(&self, event: Event) {
        let payload = event.payload(&self.timestamp());

        if let Some(port) = &self.port {
            match port.event(event.name(), &payload) {
                Ok(()) => {}
                Err(ForwardError::Missing(what)) => {
                    log::debug!("analytics collaborator {what} missing; {} traced only", event.name());
                }
                Err(e) => {
                    self.sink.trace(
                        TraceLevel::Error,
                        &format!("failed to forward {}", event.name()),
                        &json!({ "error": e.to_string() }),
                    );
                    return;
                }
            }
        }

        self.sink.trace(event.level(), event.label(), &payload);
    }

    pub fn record_checkin(&self, route_id: &str, client_id: &str, distance_meters: f64, is_valid: bool) {
        self.record(Event::Checkin {
            route_id: route_id.to_owned(),
            client_id: client_id.to_owned(),
            distance_meters,
            is_valid,
        });
    }

    pub fn record_visit_completed(&self, client_name: &str, duration_seconds: u64) {
        self.record(Event::VisitCompleted { client_name: client_name.to_owned(), duration_seconds });
    }

    pub fn record_gps_error(&self, error: &str, context: &str) {
        self.record(Event::GpsError { error: error.to_owned(), context: context.to_owned() });
    }

    pub fn record_login(&self, seller_id: &str, seller_name: &str) {
        self.record(Event::Login { seller_id: seller_id.to_owned(), seller_name: seller_name.to_owned() });
    }

    pub fn record_api_error(&self, endpoint: &str, status_code: Option<u16>, error: &str) {
        self.record(Event::ApiError { endpoint: endpoint.to_owned(), status_code, error: error.to_owned() });
    }

    pub fn record_daily_routes_summary(&self, total_routes: u32, completed_routes: u32) {
        self.record(Event::DailyRoutesSummary { total_routes, completed_routes });
    }

    pub fn record_fraud_alert(&self, visit_id: &str, fraud_flags: &[String]) {
        self.record(Event::FraudAlert { visit_id: visit_id.to_owned(), fraud_flags: fraud_flags.to_vec() });
    }

    /// Forward-free trace used by the web vitals reporter.
    pub(crate) fn trace(&self, level: TraceLevel, message: &str, fields: &serde_json::Value) {
        self.sink.trace(level, message, fields);
    }

    fn timestamp(&self) -> String {
        let now = (self.clock)();
        match now.format(&Rfc3339) {
            Ok(ts) => ts,
            Err(e) => {
                log::warn!("timestamp format failed: {e}");
                now.unix_timestamp().to_string()
            }
        }
    }
}

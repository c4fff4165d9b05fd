//! Analytics forwarding for field-sales events.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages report domain events (check-ins, visits, login, API failures) through
//! [`Analytics`]. Each event is forwarded to an injected [`AnalyticsPort`] when
//! one is configured and traced locally through a [`DiagnosticSink`].
//!
//! ERROR HANDLING
//! ==============
//! Forwarding is best effort. Port failures are traced and dropped; no
//! recorder ever returns an error to its caller.

pub mod events;
pub mod forwarder;
pub mod vitals;
#[cfg(feature = "hydrate")]
pub mod window;


pub use events::Event;
pub use forwarder::Analytics;

use serde_json::Value;

/// Error returned by an [`AnalyticsPort`] that failed to accept an event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForwardError {
    /// No collaborator to call. Not a failure; the event is traced locally.
    #[error("analytics collaborator missing: {0}")]
    Missing(String),
    #[error("analytics call failed: {0}")]
    Call(String),
    #[error("payload encoding failed: {0}")]
    Encode(String),
}

/// External analytics collaborator.
pub trait AnalyticsPort: Send + Sync {
    /// Deliver one named event.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError`] when the collaborator rejects the call.
    fn event(&self, name: &str, payload: &Value) -> Result<(), ForwardError>;
}

/// Severity of a local diagnostic trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceLevel {
    Info,
    Warn,
    Error,
}

/// Destination for local diagnostic traces.
pub trait DiagnosticSink: Send + Sync {
    fn trace(&self, level: TraceLevel, message: &str, fields: &Value);
}

/// Sink writing through the `log` facade (browser console in hydrate builds).
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn trace(&self, level: TraceLevel, message: &str, fields: &Value) {
        match level {
            TraceLevel::Info => log::info!("[Analytics] {message} {fields}"),
            TraceLevel::Warn => log::warn!("[Analytics] {message} {fields}"),
            TraceLevel::Error => log::error!("[Analytics] {message} {fields}"),
        }
    }
}

/// Port that only echoes events to the log. Used when no real backend is
/// wired but event flow should still be visible during development.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsolePort;

impl AnalyticsPort for ConsolePort {
    fn event(&self, name: &str, payload: &Value) -> Result<(), ForwardError> {
        log::info!("[Analytics] {name} {payload}");
        Ok(())
    }
}

/// Port the app forwards to in this build, or `None` when analytics is off.
#[must_use]
pub fn default_port(enabled: bool) -> Option<Box<dyn AnalyticsPort>> {
    if !enabled {
        return None;
    }
    #[cfg(feature = "hydrate")]
    {
        Some(Box::new(window::WindowPort))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Some(Box::new(ConsolePort))
    }
}

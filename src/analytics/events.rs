//! Typed analytics events and their wire payloads.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use serde_json::{Value, json};

use super::TraceLevel;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Checkin { route_id: String, client_id: String, distance_meters: f64, is_valid: bool },
    VisitCompleted { client_name: String, duration_seconds: u64 },
    GpsError { error: String, context: String },
    Login { seller_id: String, seller_name: String },
    ApiError { endpoint: String, status_code: Option<u16>, error: String },
    DailyRoutesSummary { total_routes: u32, completed_routes: u32 },
    FraudAlert { visit_id: String, fraud_flags: Vec<String> },
}

impl Event {
    /// Event name as seen by the analytics backend.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Checkin { .. } => "checkin",
            Self::VisitCompleted { .. } => "visit_completed",
            Self::GpsError { .. } => "gps_error",
            Self::Login { .. } => "seller_login",
            Self::ApiError { .. } => "api_error",
            Self::DailyRoutesSummary { .. } => "daily_routes_summary",
            Self::FraudAlert { .. } => "fraud_alert",
        }
    }

    /// Short human label for the local trace line.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Checkin { .. } => "check-in recorded",
            Self::VisitCompleted { .. } => "visit completed",
            Self::GpsError { .. } => "GPS error",
            Self::Login { .. } => "seller login",
            Self::ApiError { .. } => "API error",
            Self::DailyRoutesSummary { .. } => "daily routes",
            Self::FraudAlert { .. } => "fraud alert",
        }
    }

    #[must_use]
    pub fn level(&self) -> TraceLevel {
        match self {
            Self::GpsError { .. } | Self::ApiError { .. } => TraceLevel::Error,
            Self::FraudAlert { .. } => TraceLevel::Warn,
            _ => TraceLevel::Info,
        }
    }

    /// JSON payload stamped with the capture `timestamp`.
    #[must_use]
    pub fn payload(&self, timestamp: &str) -> Value {
        match self {
            Self::Checkin { route_id, client_id, distance_meters, is_valid } => json!({
                "route_id": route_id,
                "client_id": client_id,
                "distance_meters": distance_meters,
                "is_valid": is_valid,
                "timestamp": timestamp,
            }),
            Self::VisitCompleted { client_name, duration_seconds } => json!({
                "client": client_name,
                "duration_seconds": duration_seconds,
                "timestamp": timestamp,
            }),
            Self::GpsError { error, context } => json!({
                "error_message": error,
                "context": context,
                "timestamp": timestamp,
            }),
            Self::Login { seller_id, seller_name } => json!({
                "seller_id": seller_id,
                "seller_name": seller_name,
                "timestamp": timestamp,
            }),
            Self::ApiError { endpoint, status_code, error } => json!({
                "endpoint": endpoint,
                "status_code": status_code,
                "error_message": error,
                "timestamp": timestamp,
            }),
            Self::DailyRoutesSummary { total_routes, completed_routes } => json!({
                "total_routes": total_routes,
                "completed_routes": completed_routes,
                "completion_rate": completion_rate(*total_routes, *completed_routes),
                "timestamp": timestamp,
            }),
            Self::FraudAlert { visit_id, fraud_flags } => json!({
                "visit_id": visit_id,
                "fraud_flags": fraud_flags,
                "timestamp": timestamp,
            }),
        }
    }
}

/// Completed share of the day's routes as a percentage; `0` for no routes.
#[must_use]
pub fn completion_rate(total: u32, completed: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(completed) / f64::from(total) * 100.0
}

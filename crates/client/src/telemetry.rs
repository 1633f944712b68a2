//! Fire-and-forget telemetry sinks.

use std::collections::BTreeMap;
use std::error::Error;
use std::sync::{Arc, Mutex, PoisonError};

/// Property bag attached to every telemetry item.
pub type Properties = BTreeMap<String, String>;

/// Sink for events and captured errors.
///
/// Fire and forget: no batching, no sampling, no delivery guarantee.
pub trait TelemetrySink {
    /// Record a named event.
    fn track_event(&self, name: &str, properties: &Properties);

    /// Record a captured error.
    fn track_error(&self, error: &dyn Error, properties: &Properties);
}

impl<T: TelemetrySink + ?Sized> TelemetrySink for Arc<T> {
    fn track_event(&self, name: &str, properties: &Properties) {
        (**self).track_event(name, properties);
    }

    fn track_error(&self, error: &dyn Error, properties: &Properties) {
        (**self).track_error(error, properties);
    }
}

/// Sink forwarding everything to the `tracing` ecosystem under the
/// `telemetry` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTelemetry;

impl TelemetrySink for TracingTelemetry {
    fn track_event(&self, name: &str, properties: &Properties) {
        tracing::info!(target: "telemetry", event = name, properties = ?properties);
    }

    fn track_error(&self, error: &dyn Error, properties: &Properties) {
        tracing::error!(target: "telemetry", error = %error, properties = ?properties);
    }
}

/// One recorded telemetry item.
///
/// Errors are recorded by their display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedItem {
    pub name: String,
    pub properties: Properties,
}

/// Sink keeping everything in memory for later inspection.
#[derive(Debug, Default)]
pub struct MemoryTelemetry {
    events: Mutex<Vec<RecordedItem>>,
    errors: Mutex<Vec<RecordedItem>>,
}

impl MemoryTelemetry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, in order.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedItem> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Snapshot of the recorded errors, in order.
    #[must_use]
    pub fn errors(&self) -> Vec<RecordedItem> {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TelemetrySink for MemoryTelemetry {
    fn track_event(&self, name: &str, properties: &Properties) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedItem {
                name: name.to_owned(),
                properties: properties.clone(),
            });
    }

    fn track_error(&self, error: &dyn Error, properties: &Properties) {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedItem {
                name: error.to_string(),
                properties: properties.clone(),
            });
    }
}

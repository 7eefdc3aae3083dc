use crate::models::DataSource;
use tracing::info;

/// Sink for usage events.
///
/// Events are fire-and-forget: sinks must not fail, and callers never wait
/// on them.
pub trait AnalyticsSink: Send + Sync {
    /// Record that `action` happened to `data_source`.
    fn event(&self, data_source: &DataSource, action: &str);
}

/// Sink that writes events to the log.
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn event(&self, data_source: &DataSource, action: &str) {
        info!(
            target: "graphdeck::analytics",
            kind = data_source.kind.label(),
            name = %data_source.name,
            action,
            "analytics event"
        );
    }
}

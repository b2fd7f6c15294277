//! Analytics protocol definitions.

/// Fire-and-forget analytics delivery.
pub trait AnalyticsSink: Send + Sync {
    fn send(&self, event: &str);
}

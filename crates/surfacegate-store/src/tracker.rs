//! Recording experiment tracker and analytics sink.

use std::collections::BTreeSet;

use parking_lot::Mutex;
use tracing::{debug, info};

use surfacegate_protocols::{AnalyticsSink, ExperimentTracker};

/// Tracker that keeps the set of currently attributed experiment codes.
#[derive(Debug, Default)]
pub struct RecordingTracker {
    codes: Mutex<BTreeSet<String>>,
    calls: Mutex<usize>,
}

impl RecordingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently attributed codes, sorted.
    pub fn active_codes(&self) -> Vec<String> {
        self.codes.lock().iter().cloned().collect()
    }

    pub fn is_active(&self, code: &str) -> bool {
        self.codes.lock().contains(code)
    }

    /// Number of set/remove calls received.
    pub fn call_count(&self) -> usize {
        *self.calls.lock()
    }
}

impl ExperimentTracker for RecordingTracker {
    fn set_experiment_code(&self, code: &str) {
        *self.calls.lock() += 1;
        if self.codes.lock().insert(code.to_string()) {
            debug!(code, "experiment code set");
        }
    }

    fn remove_experiment_code(&self, code: &str) {
        *self.calls.lock() += 1;
        if self.codes.lock().remove(code) {
            debug!(code, "experiment code removed");
        }
    }
}

/// Analytics sink that logs each event and keeps them in order.
#[derive(Debug, Default)]
pub struct RecordingAnalytics {
    events: Mutex<Vec<String>>,
}

impl RecordingAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().clone()
    }
}

impl AnalyticsSink for RecordingAnalytics {
    fn send(&self, event: &str) {
        info!(event, "analytics");
        self.events.lock().push(event.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_remove_codes() {
        let tracker = RecordingTracker::new();
        tracker.set_experiment_code("GIT");
        tracker.remove_experiment_code("GIC");
        assert_eq!(tracker.active_codes(), vec!["GIT".to_string()]);
        assert!(tracker.is_active("GIT"));
        assert_eq!(tracker.call_count(), 2);

        tracker.remove_experiment_code("GIT");
        assert!(tracker.active_codes().is_empty());
    }

    #[test]
    fn test_set_is_idempotent() {
        let tracker = RecordingTracker::new();
        tracker.set_experiment_code("GDCT");
        tracker.set_experiment_code("GDCT");
        assert_eq!(tracker.active_codes().len(), 1);
    }

    #[test]
    fn test_analytics_records_in_order() {
        let sink = RecordingAnalytics::new();
        sink.send("DCBrowserExt:OneNote:Visited");
        sink.send("DCBrowserExt:DocsGoogle:Visited:Document");
        assert_eq!(
            sink.events(),
            vec![
                "DCBrowserExt:OneNote:Visited".to_string(),
                "DCBrowserExt:DocsGoogle:Visited:Document".to_string(),
            ]
        );
    }
}

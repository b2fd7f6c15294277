//! Experiment attribution protocol definitions.

/// Records which experiment buckets analytics events are attributed to.
pub trait ExperimentTracker: Send + Sync {
    /// Attribute subsequent analytics to `code`.
    fn set_experiment_code(&self, code: &str);

    /// Stop attributing analytics to `code`. Removing an absent code is a no-op.
    fn remove_experiment_code(&self, code: &str);
}

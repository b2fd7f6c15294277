//! Fakes shared by the unit tests in this crate.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use surfacegate_protocols::{
    DefaultHandlerSignal, ExperimentTracker, FlagError, FlagStore, PersistentKv, SignalError,
    StoreError, Surface,
};
use surfacegate_store::MemoryKv;

/// Wraps a [`MemoryKv`] and counts mutations.
#[derive(Default)]
pub struct CountingKv {
    pub inner: MemoryKv,
    writes: AtomicUsize,
}

impl CountingKv {
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        Self {
            inner: MemoryKv::with_entries(entries.iter().copied()),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).unwrap()
    }
}

impl PersistentKv for CountingKv {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove_item(key)
    }
}

/// A store whose every operation fails.
pub struct BrokenKv;

impl PersistentKv for BrokenKv {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("storage disabled".to_string()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("storage disabled".to_string()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("storage disabled".to_string()))
    }
}

/// A flag service that is always down.
pub struct BrokenFlags;

#[async_trait]
impl FlagStore for BrokenFlags {
    async fn has_flag(&self, name: &str) -> Result<bool, FlagError> {
        Err(FlagError::Unavailable(name.to_string()))
    }

    fn feature_meta(&self, name: &str) -> Result<Option<String>, FlagError> {
        Err(FlagError::Unavailable(name.to_string()))
    }
}

/// Tracker that records every call in order, e.g. `+GIT` / `-GIC`.
#[derive(Default)]
pub struct CallLog {
    calls: Mutex<Vec<String>>,
}

impl CallLog {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }
}

impl ExperimentTracker for CallLog {
    fn set_experiment_code(&self, code: &str) {
        self.calls.lock().push(format!("+{code}"));
    }

    fn remove_experiment_code(&self, code: &str) {
        self.calls.lock().push(format!("-{code}"));
    }
}

/// Default-handler signal that always fails.
pub struct NoSignal;

#[async_trait]
impl DefaultHandlerSignal for NoSignal {
    async fn is_default_for_surface(&self, surface: Surface) -> Result<bool, SignalError> {
        Err(SignalError::Unavailable(surface.to_string()))
    }
}

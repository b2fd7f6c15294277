//! Static feature flag store.

use async_trait::async_trait;
use dashmap::DashMap;

use surfacegate_config::Config;
use surfacegate_protocols::{FlagError, FlagStore};

#[derive(Debug, Clone)]
struct FlagEntry {
    enabled: bool,
    metadata: Option<String>,
}

/// Flag store backed by a fixed set of flags, typically from configuration.
#[derive(Debug, Default)]
pub struct StaticFlagStore {
    flags: DashMap<String, FlagEntry>,
}

impl StaticFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the `[flags]` section of the configuration.
    pub fn from_config(config: &Config) -> Self {
        let store = Self::new();
        for (name, flag) in &config.flags {
            store.flags.insert(
                name.clone(),
                FlagEntry {
                    enabled: flag.enabled,
                    metadata: flag.metadata.clone(),
                },
            );
        }
        store
    }

    /// Turn a flag on with optional raw metadata.
    pub fn set_flag(&self, name: impl Into<String>, metadata: Option<&str>) {
        self.flags.insert(
            name.into(),
            FlagEntry {
                enabled: true,
                metadata: metadata.map(str::to_string),
            },
        );
    }

    pub fn remove_flag(&self, name: &str) {
        self.flags.remove(name);
    }

    pub fn len(&self) -> usize {
        self.flags.iter().filter(|entry| entry.enabled).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl FlagStore for StaticFlagStore {
    async fn has_flag(&self, name: &str) -> Result<bool, FlagError> {
        Ok(self.flags.get(name).is_some_and(|entry| entry.enabled))
    }

    fn feature_meta(&self, name: &str) -> Result<Option<String>, FlagError> {
        Ok(self
            .flags
            .get(name)
            .filter(|entry| entry.enabled)
            .and_then(|entry| entry.metadata.clone()))
    }
}

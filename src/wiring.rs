//! Collaborator wiring from configuration.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, warn};

use surfacegate_config::{Config, ConfigLoader};
use surfacegate_core::{Collaborators, ConvertToPdfGate, ViewershipEngine, VisitReporter};
use surfacegate_protocols::{PersistentKv, StoreError};
use surfacegate_store::{
    FileKv, RecordingAnalytics, RecordingTracker, StaticFlagStore, StaticHost, TranslationTable,
};

/// Everything a command needs, built once per invocation.
pub(crate) struct App {
    pub kv: Arc<FileKv>,
    pub flags: Arc<StaticFlagStore>,
    pub tracker: Arc<RecordingTracker>,
    pub analytics: Arc<RecordingAnalytics>,
    pub localization: Arc<TranslationTable>,
    pub host: Arc<StaticHost>,
}

impl App {
    pub fn build(config: &Config, state_file: Option<PathBuf>) -> Result<Self, StoreError> {
        let path = state_file
            .unwrap_or_else(|| PathBuf::from(ConfigLoader::expand_path(&config.storage.path)));
        let kv = Arc::new(FileKv::open(path)?);
        debug!("Using state file {}", kv.path().display());

        // Preferences stand in for values the browser owns, so config always wins.
        for (key, value) in &config.preferences {
            if let Err(e) = kv.set_item(key, value) {
                warn!("Failed to apply preference {}: {}", key, e);
            }
        }

        Ok(Self {
            kv,
            flags: Arc::new(StaticFlagStore::from_config(config)),
            tracker: Arc::new(RecordingTracker::new()),
            analytics: Arc::new(RecordingAnalytics::new()),
            localization: Arc::new(TranslationTable::from_config(config)),
            host: Arc::new(StaticHost::from_config(config)),
        })
    }

    pub fn engine(&self) -> ViewershipEngine {
        ViewershipEngine::new(Collaborators {
            flags: self.flags.clone(),
            kv: self.kv.clone(),
            tracker: self.tracker.clone(),
            localization: self.localization.clone(),
            default_handler: self.host.clone(),
        })
    }

    pub fn convert_to_pdf_gate(&self) -> ConvertToPdfGate {
        ConvertToPdfGate::new(
            self.flags.clone(),
            self.kv.clone(),
            self.tracker.clone(),
            self.localization.clone(),
        )
    }

    pub fn visit_reporter(&self) -> VisitReporter {
        VisitReporter::new(self.kv.clone(), self.analytics.clone())
    }
}

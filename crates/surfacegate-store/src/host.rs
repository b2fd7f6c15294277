//! Host facts and touch points for non-browser runs.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{info, warn};

use surfacegate_config::Config;
use surfacegate_protocols::{
    DefaultHandlerSignal, HostEnvironment, SignalError, Surface, Touchpoints,
};

/// Host environment answered from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticHost {
    extension_id: Option<String>,
    add_on_default: HashMap<Surface, bool>,
    default_handler: HashMap<Surface, bool>,
}

impl StaticHost {
    pub fn new(extension_id: Option<String>) -> Self {
        Self {
            extension_id,
            ..Self::default()
        }
    }

    /// Build from `[host]` and `[default_handler]`. Unknown surface keys are skipped.
    pub fn from_config(config: &Config) -> Self {
        Self {
            extension_id: config.host.extension_id.clone(),
            add_on_default: parse_surface_map(&config.host.add_on_default),
            default_handler: parse_surface_map(&config.default_handler),
        }
    }

    pub fn with_add_on_default(mut self, surface: Surface, value: bool) -> Self {
        self.add_on_default.insert(surface, value);
        self
    }

    pub fn with_default_handler(mut self, surface: Surface, value: bool) -> Self {
        self.default_handler.insert(surface, value);
        self
    }
}

fn parse_surface_map<'a>(
    entries: impl IntoIterator<Item = (&'a String, &'a bool)>,
) -> HashMap<Surface, bool> {
    entries
        .into_iter()
        .filter_map(|(key, value)| match key.parse::<Surface>() {
            Ok(surface) => Some((surface, *value)),
            Err(e) => {
                warn!("Ignoring host setting: {}", e);
                None
            }
        })
        .collect()
}

impl HostEnvironment for StaticHost {
    fn extension_id(&self) -> Option<String> {
        self.extension_id.clone().filter(|id| !id.is_empty())
    }

    fn add_on_default(&self, surface: Surface) -> Option<bool> {
        self.add_on_default.get(&surface).copied()
    }
}

#[async_trait]
impl DefaultHandlerSignal for StaticHost {
    async fn is_default_for_surface(&self, surface: Surface) -> Result<bool, SignalError> {
        self.default_handler.get(&surface).copied().ok_or_else(|| {
            SignalError::Unavailable(format!("no default handler status for {}", surface))
        })
    }
}

/// Touch points that only log what a content script would do.
#[derive(Debug, Default)]
pub struct LogTouchpoints;

impl Touchpoints for LogTouchpoints {
    fn remove_all(&self, surface: Surface) {
        info!(%surface, "removing all touch points");
    }

    fn show_implicit_toast(&self, surface: Surface, message: &str) {
        info!(%surface, message, "showing implicit default viewership toast");
    }
}

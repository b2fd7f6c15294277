//! Google Docs convert-to-PDF touch-point rollout.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use surfacegate_protocols::{
    deserialize_truthy, ExperimentTracker, FlagStore, FteStrings, Localization, PersistentKv,
};

use crate::locale;
use crate::state;

pub const TREATMENT_FLAG: &str = "dc-cv-google-docs-convert-to-pdf-touch-point";
pub const CONTROL_FLAG: &str = "dc-cv-google-docs-convert-to-pdf-touch-point-control";
pub const TREATMENT_CODE: &str = "GDCT";
pub const CONTROL_CODE: &str = "GDCC";

/// DOM selectors the content script uses to place the touch point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TouchpointSelectors {
    pub touch_point_container: Vec<String>,
    pub doc_title: Vec<String>,
}

impl Default for TouchpointSelectors {
    fn default() -> Self {
        Self {
            touch_point_container: vec!["docs-titlebar-buttons".to_string()],
            doc_title: vec!["docs-title-input".to_string()],
        }
    }
}

/// Metadata carried by the convert-to-PDF flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TouchpointMetadata {
    #[serde(deserialize_with = "deserialize_truthy")]
    pub is_en_locale_enabled: bool,
    #[serde(deserialize_with = "deserialize_truthy")]
    pub is_non_en_locale_enabled: bool,
    pub valid_paths: Vec<String>,
    pub selectors: TouchpointSelectors,
}

impl Default for TouchpointMetadata {
    fn default() -> Self {
        Self {
            is_en_locale_enabled: false,
            is_non_en_locale_enabled: false,
            valid_paths: ["document", "spreadsheets", "presentation"]
                .map(str::to_string)
                .to_vec(),
            selectors: TouchpointSelectors::default(),
        }
    }
}

/// Strings rendered on and around the touch point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchpointText {
    pub tooltip: String,
    pub button_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fte: Option<FteStrings>,
}

/// Resolved touch-point configuration for a Docs page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchpointConfig {
    pub enabled: bool,
    pub metadata: TouchpointMetadata,
    pub text: TouchpointText,
}

/// Decides whether Google Docs shows the convert-to-PDF touch point.
pub struct ConvertToPdfGate {
    flags: Arc<dyn FlagStore>,
    kv: Arc<dyn PersistentKv>,
    tracker: Arc<dyn ExperimentTracker>,
    localization: Arc<dyn Localization>,
}

impl ConvertToPdfGate {
    pub fn new(
        flags: Arc<dyn FlagStore>,
        kv: Arc<dyn PersistentKv>,
        tracker: Arc<dyn ExperimentTracker>,
        localization: Arc<dyn Localization>,
    ) -> Self {
        Self {
            flags,
            kv,
            tracker,
            localization,
        }
    }

    /// Resolve the touch point. `surface_name_key` is the translation key of
    /// the host surface's display name; without it no FTE strings are built.
    pub async fn resolve(&self, surface_name_key: Option<&str>) -> TouchpointConfig {
        let (treatment, control) =
            tokio::join!(self.flag_present(TREATMENT_FLAG), self.flag_present(CONTROL_FLAG));

        let opted_out = state::touch_points_opted_out(self.kv.as_ref());
        let locale = state::read_locale(self.kv.as_ref());

        let treatment_meta = treatment.then(|| self.metadata(TREATMENT_FLAG));
        let control_meta = control.then(|| self.metadata(CONTROL_FLAG));

        let eligible = |meta: &Option<TouchpointMetadata>| {
            meta.as_ref().is_some_and(|m| {
                locale::is_eligible(
                    locale.as_deref(),
                    m.is_en_locale_enabled,
                    m.is_non_en_locale_enabled,
                )
            }) && !opted_out
        };
        let treatment_eligible = eligible(&treatment_meta);
        let control_eligible = eligible(&control_meta);

        if treatment_eligible {
            self.tracker.set_experiment_code(TREATMENT_CODE);
            self.tracker.remove_experiment_code(CONTROL_CODE);
        } else if control_eligible {
            self.tracker.set_experiment_code(CONTROL_CODE);
            self.tracker.remove_experiment_code(TREATMENT_CODE);
        }

        debug!(
            "Convert-to-PDF touch point: treatment={} control={} opted_out={}",
            treatment_eligible, control_eligible, opted_out
        );

        TouchpointConfig {
            enabled: treatment_eligible,
            metadata: treatment_meta.unwrap_or_default(),
            text: self.text(surface_name_key),
        }
    }

    async fn flag_present(&self, name: &str) -> bool {
        match self.flags.has_flag(name).await {
            Ok(present) => present,
            Err(e) => {
                warn!("Flag {} unavailable, treating as off: {}", name, e);
                false
            }
        }
    }

    fn metadata(&self, name: &str) -> TouchpointMetadata {
        let raw = match self.flags.feature_meta(name) {
            Ok(Some(raw)) => raw,
            Ok(None) => return TouchpointMetadata::default(),
            Err(e) => {
                error!("Failure in reading FeatureFlag {}: {}", name, e);
                return TouchpointMetadata::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(metadata) => metadata,
            Err(e) => {
                error!("Failure in parsing FeatureFlag {}: {}", name, e);
                TouchpointMetadata::default()
            }
        }
    }

    fn text(&self, surface_name_key: Option<&str>) -> TouchpointText {
        let l10n = self.localization.as_ref();
        let fte = surface_name_key.map(|key| {
            let surface_name = l10n.translation(key, &[]);
            FteStrings {
                title: l10n.translation("convertToPDFFTEHeading", &[]),
                description: l10n.translation("convertToPDFFTEBody", &[&surface_name]),
                button: l10n.translation("closeButton", &[]),
            }
        });
        TouchpointText {
            tooltip: l10n.translation("convertToPDFTouchPointTooltip", &[]),
            button_text: l10n.translation("gmailConvertToPdf", &[]),
            fte,
        }
    }
}

#[cfg(test)]
#[path = "touchpoint_tests.rs"]
mod tests;

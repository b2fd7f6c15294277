//! Per-surface persisted viewership state.
//!
//! The persistence layer stores tri-states as `"true"` / `"false"` strings;
//! this module is the only place that knows the key layout.

use tracing::warn;

use surfacegate_protocols::storage::keys;
use surfacegate_protocols::{PersistentKv, StoreError, Surface, TriState};

/// Storage keys for one surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewershipKeys {
    pub enablement_status: String,
    pub default_viewership: String,
    pub implicit_dv_enabled: String,
}

impl ViewershipKeys {
    pub fn for_surface(surface: Surface) -> Self {
        let ns = surface.key();
        Self {
            enablement_status: format!("{ns}-pdf-implicit-dv-feature-enablement-status"),
            default_viewership: format!("{ns}-pdf-default-viewership"),
            implicit_dv_enabled: format!("{ns}-pdf-implicit-dv-feature-enabled"),
        }
    }
}

/// Snapshot of the persisted state for one surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedViewershipState {
    /// Which arm the surface was bucketed into: `Enabled` = treatment, `Disabled` = control.
    pub enablement_status: TriState,
    /// User-visible "extension is the default viewer here" preference.
    pub default_viewership: TriState,
    /// Final decision of the last evaluation.
    pub implicit_dv_enabled: TriState,
}

/// Reads and writes [`PersistedViewershipState`] for a single surface.
pub struct ViewershipStateStore<'a> {
    kv: &'a dyn PersistentKv,
    surface: Surface,
    keys: ViewershipKeys,
}

impl<'a> ViewershipStateStore<'a> {
    pub fn new(kv: &'a dyn PersistentKv, surface: Surface) -> Self {
        Self {
            kv,
            surface,
            keys: ViewershipKeys::for_surface(surface),
        }
    }

    pub fn keys(&self) -> &ViewershipKeys {
        &self.keys
    }

    pub fn load(&self) -> Result<PersistedViewershipState, StoreError> {
        Ok(PersistedViewershipState {
            enablement_status: self.read(&self.keys.enablement_status)?,
            default_viewership: self.read(&self.keys.default_viewership)?,
            implicit_dv_enabled: self.read(&self.keys.implicit_dv_enabled)?,
        })
    }

    pub fn set_enablement_status(&self, value: TriState) {
        self.write(&self.keys.enablement_status, value);
    }

    pub fn set_default_viewership(&self, value: TriState) {
        self.write(&self.keys.default_viewership, value);
    }

    pub fn set_implicit_dv_enabled(&self, value: bool) {
        self.write(&self.keys.implicit_dv_enabled, TriState::from(value));
    }

    /// Remove every key for this surface. Only explicit user actions call this.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.kv.remove_item(&self.keys.enablement_status)?;
        self.kv.remove_item(&self.keys.default_viewership)?;
        self.kv.remove_item(&self.keys.implicit_dv_enabled)?;
        Ok(())
    }

    fn read(&self, key: &str) -> Result<TriState, StoreError> {
        let value = self.kv.get_item(key)?;
        Ok(TriState::from_stored(value.as_deref()))
    }

    // Write failures are logged and dropped; the next evaluation re-derives
    // everything from whatever was actually stored.
    fn write(&self, key: &str, value: TriState) {
        let result = match value.as_stored() {
            Some(text) => self.kv.set_item(key, text),
            None => self.kv.remove_item(key),
        };
        if let Err(e) = result {
            warn!("Failed to persist {} for {}: {}", key, self.surface, e);
        }
    }
}

/// The user's locale, `None` when unknown or unreadable.
pub fn read_locale(kv: &dyn PersistentKv) -> Option<String> {
    match kv.get_item(keys::LOCALE) {
        Ok(locale) => locale,
        Err(e) => {
            warn!("Locale unavailable, assuming non-English: {}", e);
            None
        }
    }
}

/// Whether the global `pdfViewer` preference is explicitly `"false"`.
///
/// An unreadable store counts as opted out.
pub fn pdf_viewer_opted_out(kv: &dyn PersistentKv) -> bool {
    match kv.get_item(keys::PDF_VIEWER) {
        Ok(value) => value.as_deref() == Some("false"),
        Err(e) => {
            warn!("pdfViewer preference unavailable: {}", e);
            true
        }
    }
}

/// Whether touch points on other surfaces were switched off by the user.
pub fn touch_points_opted_out(kv: &dyn PersistentKv) -> bool {
    match kv.get_item(keys::TOUCH_POINTS_IN_OTHER_SURFACES) {
        Ok(value) => value.as_deref() == Some("false"),
        Err(e) => {
            warn!("Touch point preference unavailable: {}", e);
            true
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;

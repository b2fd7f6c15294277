//! Persistent key/value protocol definitions.

use crate::error::StoreError;

/// Well-known global keys shared across surfaces.
pub mod keys {
    /// Current UI locale tag.
    pub const LOCALE: &str = "locale";
    /// Global "use the extension as PDF viewer" preference.
    pub const PDF_VIEWER: &str = "pdfViewer";
    /// Global opt-out for touch points on non-Acrobat surfaces.
    pub const TOUCH_POINTS_IN_OTHER_SURFACES: &str = "acrobat-touch-points-in-other-surfaces";
}

/// Durable string key/value store ("local storage").
///
/// Callers namespace keys themselves; values are always strings.
pub trait PersistentKv: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

//! Decision values returned to surface adapters.

use serde::{Deserialize, Serialize};

/// First-time-experience tooltip strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FteStrings {
    pub title: String,
    pub description: String,
    pub button: String,
}

/// Outcome of evaluating implicit default viewership for one surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    /// Whether the implicit default viewership feature is active.
    pub enabled: bool,
    /// Whether the extension is already the default handler for the surface.
    pub is_acrobat_default_for_surface: bool,
    pub toast_message: String,
    pub fte_strings: FteStrings,
}

impl Decision {
    /// The kill-switch decision: everything off, every string empty.
    pub fn disabled() -> Self {
        Self::default()
    }
}

//! Tri-state persisted flags.

use serde::{Deserialize, Serialize};

/// A persisted boolean that may never have been written.
///
/// Storage holds these as `"true"` / `"false"` / absent; the conversion
/// lives here so nothing else compares raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    #[default]
    Unset,
    Enabled,
    Disabled,
}

impl TriState {
    /// Decode a stored value. Absent, empty or unrecognized text is `Unset`.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("true") => TriState::Enabled,
            Some("false") => TriState::Disabled,
            _ => TriState::Unset,
        }
    }

    /// Encode for storage. `Unset` has no stored form.
    pub fn as_stored(self) -> Option<&'static str> {
        match self {
            TriState::Unset => None,
            TriState::Enabled => Some("true"),
            TriState::Disabled => Some("false"),
        }
    }

    pub fn is_set(self) -> bool {
        self != TriState::Unset
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value {
            TriState::Enabled
        } else {
            TriState::Disabled
        }
    }
}

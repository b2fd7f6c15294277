//! Feature flag metadata.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::MetadataParseError;

/// Rollout switches carried by the implicit default viewership flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagMetadata {
    pub en_locale_enabled: bool,
    pub non_en_locale_enabled: bool,
}

impl FlagMetadata {
    /// Parse flag metadata JSON.
    ///
    /// Only invalid JSON is an error. Switches are read loosely: a missing,
    /// `null` or falsy field is off, any truthy value is on.
    pub fn parse(raw: &str) -> Result<Self, MetadataParseError> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        Self {
            en_locale_enabled: is_truthy(value.get("enLocaleEnabled")),
            non_en_locale_enabled: is_truthy(value.get("nonEnLocaleEnabled")),
        }
    }
}

/// Loose boolean reading of a metadata switch.
///
/// `true`, non-zero numbers, non-empty strings, arrays and objects are on;
/// absent, `null`, `false`, `0` and `""` are off.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Serde adapter reading a field with [`is_truthy`].
pub fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(is_truthy(value.as_ref()))
}

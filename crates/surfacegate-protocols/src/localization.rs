//! Localization protocol definitions.

/// Translated UI string lookup.
pub trait Localization: Send + Sync {
    /// Translate `key`, substituting positional `args`.
    ///
    /// Missing keys yield an empty string.
    fn translation(&self, key: &str, args: &[&str]) -> String;
}

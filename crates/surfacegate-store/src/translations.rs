//! Translation table.

use std::collections::BTreeMap;

use tracing::debug;

use surfacegate_config::Config;
use surfacegate_protocols::Localization;

/// Message templates keyed by name. `$1`..`$9` are replaced by arguments.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    messages: BTreeMap<String, String>,
}

impl TranslationTable {
    pub fn new(messages: BTreeMap<String, String>) -> Self {
        Self { messages }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.translations.clone())
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(key.into(), template.into());
    }
}

fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '$' {
            if let Some(index) = chars.peek().and_then(|d| d.to_digit(10)) {
                if index >= 1 {
                    chars.next();
                    if let Some(arg) = args.get(index as usize - 1) {
                        out.push_str(arg);
                    }
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

impl Localization for TranslationTable {
    fn translation(&self, key: &str, args: &[&str]) -> String {
        match self.messages.get(key) {
            Some(template) => substitute(template, args),
            None => {
                debug!(key, "missing translation");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TranslationTable {
        let mut table = TranslationTable::default();
        table.insert("closeButton", "Close");
        table.insert("convertToPDFFTEBody", "Convert your $1 file to PDF");
        table.insert("price", "Costs $0 or 5 US$");
        table
    }

    #[test]
    fn test_plain_translation() {
        assert_eq!(table().translation("closeButton", &[]), "Close");
    }

    #[test]
    fn test_placeholder_substitution() {
        assert_eq!(
            table().translation("convertToPDFFTEBody", &["Google Docs"]),
            "Convert your Google Docs file to PDF"
        );
    }

    #[test]
    fn test_missing_argument_is_dropped() {
        assert_eq!(
            table().translation("convertToPDFFTEBody", &[]),
            "Convert your  file to PDF"
        );
    }

    #[test]
    fn test_non_placeholder_dollars_kept() {
        assert_eq!(table().translation("price", &[]), "Costs $0 or 5 US$");
    }

    #[test]
    fn test_missing_key_is_empty() {
        assert_eq!(table().translation("gmailImplicitDVNotification", &[]), "");
    }
}

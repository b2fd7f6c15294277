//! Locale classification for rollout eligibility.

use surfacegate_protocols::FlagMetadata;

/// Only these two tags count as English; every other tag, including other
/// English dialects, is non-English.
const ENGLISH_LOCALES: [&str; 2] = ["en-US", "en-GB"];

pub fn is_english(locale: Option<&str>) -> bool {
    locale.is_some_and(|tag| ENGLISH_LOCALES.contains(&tag))
}

/// Whether a rollout with the given switches covers `locale`.
pub fn is_eligible(locale: Option<&str>, en_enabled: bool, non_en_enabled: bool) -> bool {
    if is_english(locale) {
        en_enabled
    } else {
        non_en_enabled
    }
}

/// Eligibility for an implicit default viewership arm.
pub fn is_eligible_for(locale: Option<&str>, metadata: &FlagMetadata) -> bool {
    is_eligible(locale, metadata.en_locale_enabled, metadata.non_en_locale_enabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_classification() {
        assert!(is_english(Some("en-US")));
        assert!(is_english(Some("en-GB")));
        assert!(!is_english(Some("en-AU")));
        assert!(!is_english(Some("en")));
        assert!(!is_english(Some("fr-FR")));
        assert!(!is_english(Some("")));
        assert!(!is_english(None));
    }

    #[test]
    fn test_eligibility_matrix() {
        assert!(is_eligible(Some("en-US"), true, false));
        assert!(!is_eligible(Some("en-US"), false, true));
        assert!(is_eligible(Some("de-DE"), false, true));
        assert!(!is_eligible(Some("de-DE"), true, false));
        assert!(is_eligible(None, false, true));
        assert!(!is_eligible(None, false, false));
    }

    #[test]
    fn test_empty_metadata_is_never_eligible() {
        let metadata = FlagMetadata::default();
        assert!(!is_eligible_for(Some("en-GB"), &metadata));
        assert!(!is_eligible_for(Some("ja-JP"), &metadata));
    }
}

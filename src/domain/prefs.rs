//! UiPrefs - Persisted UI Preferences
//!
//! Only chrome preferences are stored; view state such as the search text
//! is never persisted.

use serde::{Deserialize, Serialize};

use crate::i18n::{locale_from_tag, Locale};

/// UI preferences stored in the platform data directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiPrefs {
    /// BCP 47 tag of the chosen chrome language, if the user picked one
    pub language: Option<String>,
}

impl UiPrefs {
    /// Create preferences recording the given locale
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            language: Some(locale.tag().to_string()),
        }
    }

    /// The stored locale, if any
    pub fn locale(&self) -> Option<Locale> {
        self.language.as_deref().map(locale_from_tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefs_store_no_locale() {
        assert_eq!(UiPrefs::default().locale(), None);
    }

    #[test]
    fn locale_survives_serde_round_trip() {
        let prefs = UiPrefs::with_locale(Locale::EnUS);
        let json = serde_json::to_string(&prefs).expect("serialize");
        let back: UiPrefs = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.locale(), Some(Locale::EnUS));
    }
}

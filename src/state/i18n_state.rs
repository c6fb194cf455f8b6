//! I18nState - Internationalization State

use crate::i18n::Locale;

/// State for internationalization
#[derive(Debug, Clone, Default)]
pub struct I18nState {
    /// Current locale
    pub locale: Locale,
}

impl I18nState {
    /// Set the locale
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Toggle between Japanese and English
    pub fn toggle_locale(&mut self) {
        self.locale = match self.locale {
            Locale::JaJP => Locale::EnUS,
            Locale::EnUS => Locale::JaJP,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_japanese() {
        assert_eq!(I18nState::default().locale, Locale::JaJP);
    }

    #[test]
    fn toggle_round_trips() {
        let mut state = I18nState::default();
        state.toggle_locale();
        assert_eq!(state.locale, Locale::EnUS);
        state.toggle_locale();
        assert_eq!(state.locale, Locale::JaJP);
    }
}

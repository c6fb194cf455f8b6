//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.
//! The marketing copy itself (hero text, feature cards, stat tiles) is
//! canonical Japanese display data and lives in `domain::content`; only
//! the chrome labels go through this table.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Japanese
    #[default]
    JaJP,
    /// English (US)
    EnUS,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::JaJP => "日本語",
            Locale::EnUS => "English",
        }
    }

    /// Short tag used in the preferences file
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::JaJP => "ja-JP",
            Locale::EnUS => "en-US",
        }
    }
}

/// Map a BCP 47 language tag onto a supported locale.
pub fn locale_from_tag(tag: &str) -> Locale {
    if tag.starts_with("en") {
        Locale::EnUS
    } else {
        Locale::JaJP
    }
}

/// Detect the system locale at startup.
pub fn detect_locale() -> Locale {
    let current = locale_config::Locale::current().to_string();
    locale_from_tag(&current)
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (ja, en))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("LoL Meta AI", "LoL Meta AI"));

    // Navigation
    map.insert("nav-analysis", ("分析", "Analysis"));
    map.insert("nav-champions", ("チャンピオン", "Champions"));
    map.insert("nav-pro-scene", ("プロシーン", "Pro Scene"));
    map.insert("nav-rankings", ("ランキング", "Rankings"));

    // Search bar
    map.insert(
        "search-placeholder",
        ("サモナー名、チャンピオン名で検索...", "Search summoners or champions..."),
    );
    map.insert("action-search", ("検索", "Search"));

    // Call-to-action buttons
    map.insert("action-start-analysis", ("AI分析を開始", "Start AI Analysis"));
    map.insert("action-view-demo", ("デモを見る", "View Demo"));

    // Footer
    map.insert(
        "footer-copyright",
        (
            "© 2024 LoL Meta AI. League of Legends AI分析プラットフォーム",
            "© 2024 LoL Meta AI. League of Legends AI Analytics Platform",
        ),
    );
    map.insert(
        "footer-disclaimer",
        (
            "Riot Games公式ではありません。League of LegendsはRiot Games, Inc.の商標です。",
            "Not affiliated with Riot Games. League of Legends is a trademark of Riot Games, Inc.",
        ),
    );

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(ja, en)) = translations().get(key) {
        match locale {
            Locale::JaJP => SharedString::from(ja),
            Locale::EnUS => SharedString::from(en),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_known_key() {
        assert_eq!(t(Locale::JaJP, "action-search"), "検索");
        assert_eq!(t(Locale::EnUS, "action-search"), "Search");
    }

    #[test]
    fn translate_unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::JaJP, "no-such-key"), "no-such-key");
    }

    #[test]
    fn locale_from_tag_maps_english_and_defaults_to_japanese() {
        assert_eq!(locale_from_tag("en-US"), Locale::EnUS);
        assert_eq!(locale_from_tag("en"), Locale::EnUS);
        assert_eq!(locale_from_tag("ja-JP"), Locale::JaJP);
        assert_eq!(locale_from_tag("fr-FR"), Locale::JaJP);
    }

    #[test]
    fn locale_tag_round_trips() {
        for locale in [Locale::JaJP, Locale::EnUS] {
            assert_eq!(locale_from_tag(locale.tag()), locale);
        }
    }
}

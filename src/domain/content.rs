//! Content - Static Landing Catalogs
//!
//! The feature cards, stat tiles, and navigation links shown on the landing
//! screen. These are hardcoded display strings, not data: they never change
//! at runtime and do not vary with the chrome locale.

use crate::assets::CustomIconName;

/// A static (icon, title, description) triple rendered as one feature card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub icon: CustomIconName,
    pub title: &'static str,
    pub description: &'static str,
}

/// A static (value, caption) pair rendered as one stat tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTile {
    pub value: &'static str,
    pub caption: &'static str,
}

/// A header navigation link with an inert target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Translation key for the label
    pub label_key: &'static str,
    /// Link target; `#` means the link goes nowhere
    pub target: &'static str,
}

/// Hero headline, brand line
pub const HERO_BRAND: &str = "LoL Meta";
/// Hero headline, second line
pub const HERO_SUBTITLE: &str = "AI分析プラットフォーム";
/// Hero tagline lines shown under the headline
pub const HERO_TAGLINE: [&str; 3] = [
    "League of LegendsのメタゲームをAIで分析。",
    "チャンピオン統計、ビルド推奨、戦略分析を提供する",
    "インテリジェントプラットフォーム",
];

/// The three feature cards, in display order
pub const FEATURES: [FeatureDescriptor; 3] = [
    FeatureDescriptor {
        icon: CustomIconName::BarChart,
        title: "メタ分析",
        description: "AIによる最新メタゲームの深度分析と予測",
    },
    FeatureDescriptor {
        icon: CustomIconName::Trophy,
        title: "チャンピオン統計",
        description: "勝率、ピック率、バン率の詳細データと推奨ビルド",
    },
    FeatureDescriptor {
        icon: CustomIconName::Users,
        title: "プロシーン分析",
        description: "プロプレイヤーの戦略とチーム構成の分析",
    },
];

/// The four stat tiles, in display order
pub const STATS: [StatTile; 4] = [
    StatTile { value: "160+", caption: "チャンピオン" },
    StatTile { value: "1M+", caption: "試合データ" },
    StatTile { value: "99.2%", caption: "予測精度" },
    StatTile { value: "24/7", caption: "リアルタイム更新" },
];

/// The four header navigation links, all inert
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label_key: "nav-analysis", target: "#" },
    NavLink { label_key: "nav-champions", target: "#" },
    NavLink { label_key: "nav-pro-scene", target: "#" },
    NavLink { label_key: "nav-rankings", target: "#" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_grid_has_three_cards_in_fixed_order() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles, vec!["メタ分析", "チャンピオン統計", "プロシーン分析"]);
    }

    #[test]
    fn feature_icons_are_distinct() {
        assert_ne!(FEATURES[0].icon, FEATURES[1].icon);
        assert_ne!(FEATURES[1].icon, FEATURES[2].icon);
        assert_ne!(FEATURES[0].icon, FEATURES[2].icon);
    }

    #[test]
    fn stats_panel_has_four_fixed_tiles() {
        let values: Vec<_> = STATS.iter().map(|s| s.value).collect();
        assert_eq!(values, vec!["160+", "1M+", "99.2%", "24/7"]);
    }

    #[test]
    fn nav_links_are_all_inert() {
        assert_eq!(NAV_LINKS.len(), 4);
        assert!(NAV_LINKS.iter().all(|link| link.target == "#"));
    }

    #[test]
    fn nav_link_labels_are_translated() {
        use crate::i18n::{t, Locale};
        for link in NAV_LINKS {
            // Every label key must resolve to something other than itself.
            assert_ne!(t(Locale::JaJP, link.label_key), link.label_key);
        }
    }
}

//! Embedded assets for the landing screen
//!
//! Uses rust-embed to bundle SVG icons at compile time and serve them to
//! GPUI through an `AssetSource`.

use gpui::{AssetSource, Result, SharedString};
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        // Then try our own assets
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            Self::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

/// Icon names for the landing screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomIconName {
    /// Bar chart icon (meta analysis card)
    BarChart,
    /// Trophy icon (champion stats card)
    Trophy,
    /// Users icon (pro scene card)
    Users,
    /// Search icon (search bar)
    Search,
    /// Sparkles icon (primary call to action)
    Sparkles,
    /// Arrow right icon (primary call to action)
    ArrowRight,
}

impl CustomIconName {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            CustomIconName::BarChart => "icons/bar-chart.svg",
            CustomIconName::Trophy => "icons/trophy.svg",
            CustomIconName::Users => "icons/users.svg",
            CustomIconName::Search => "icons/search.svg",
            CustomIconName::Sparkles => "icons/sparkles.svg",
            CustomIconName::ArrowRight => "icons/arrow-right.svg",
        }
        .into()
    }
}

//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and
//! management. State is split by update frequency: the search text changes
//! on every keystroke, the locale almost never.

use gpui::{App, AppContext, Entity, Global};

use crate::state::{i18n_state::I18nState, search_state::SearchState};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Search query text (the only view state)
    pub search: Entity<SearchState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities with default values
    pub fn init(cx: &mut App) -> Self {
        Self {
            search: cx.new(|_| SearchState::new()),
            i18n: cx.new(|_| I18nState::default()),
        }
    }
}

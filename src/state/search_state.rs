//! SearchState - Search Query Text
//!
//! The one piece of ephemeral view state on the landing screen. The text is
//! replaced on every keystroke and is never submitted or persisted anywhere.

/// State for the search input field
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Current text of the search field
    query: String,
}

impl SearchState {
    /// Create an empty search state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current query text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query with the new field content
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Whether the field is empty (placeholder shown)
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Reset to empty
    pub fn clear(&mut self) {
        self.query.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let state = SearchState::new();
        assert!(state.is_empty());
        assert_eq!(state.query(), "");
    }

    #[test]
    fn set_query_is_identity() {
        // Displayed value equals the typed text, with no transformation.
        let mut state = SearchState::new();
        for text in ["Ahri", "faker 123", "ヤスオ", "  spaces  ", ""] {
            state.set_query(text);
            assert_eq!(state.query(), text);
        }
    }

    #[test]
    fn set_query_replaces_previous_value() {
        let mut state = SearchState::new();
        state.set_query("Ahri");
        state.set_query("Ah");
        assert_eq!(state.query(), "Ah");
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut state = SearchState::new();
        state.set_query("Ahri");
        state.clear();
        assert!(state.is_empty());
    }
}

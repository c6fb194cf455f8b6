//! Landing Controller
//!
//! Handles the (deliberately inert) actions of the landing view.

use gpui::App;

use crate::app::entities::AppEntities;

/// Landing view controller
pub struct LandingController {
    entities: AppEntities,
}

impl LandingController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Replace the search query with the new field content
    pub fn set_query(&self, text: &str, cx: &mut App) {
        self.entities.search.update(cx, |state, cx| {
            state.set_query(text);
            cx.notify();
        });
    }

    /// Activate the search button.
    ///
    /// There is no backend to call: this is an intentional no-op. The only
    /// effect is a debug trace so the inertness stays visible to developers.
    pub fn submit_search(&self, cx: &mut App) {
        let query = self.entities.search.read(cx).query().to_string();
        tracing::debug!(%query, "search activated; no backend wired, ignoring");
    }

    /// Activate one of the call-to-action buttons. Also inert.
    pub fn activate_cta(&self, name: &'static str) {
        tracing::debug!(button = name, "inert call-to-action activated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn submit_search_changes_no_state(cx: &mut TestAppContext) {
        let entities = cx.update(AppEntities::init);
        let controller = LandingController::new(entities.clone());

        // Activation must leave the query untouched for any prior value.
        for query in ["", "Ahri", "ヤスオ"] {
            cx.update(|cx| {
                entities.search.update(cx, |state, cx| {
                    state.set_query(query);
                    cx.notify();
                });
                controller.submit_search(cx);
                assert_eq!(entities.search.read(cx).query(), query);
            });
        }
    }

    #[gpui::test]
    fn set_query_replaces_state(cx: &mut TestAppContext) {
        let entities = cx.update(AppEntities::init);
        let controller = LandingController::new(entities.clone());

        cx.update(|cx| {
            controller.set_query("Ahri", cx);
            assert_eq!(entities.search.read(cx).query(), "Ahri");
        });
    }
}

//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::domain::prefs::UiPrefs;
use crate::i18n;
use crate::utils::config_store;

actions!(lolmeta, [Quit]);

/// Run the landing screen application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities
        let entities = AppEntities::init(cx);
        cx.set_global(entities.clone());

        // Chrome language: saved preference first, system locale otherwise
        let locale = match config_store::load_prefs::<UiPrefs>("prefs.json") {
            Ok(prefs) => prefs.locale().unwrap_or_else(i18n::detect_locale),
            Err(e) => {
                tracing::warn!("Failed to load preferences: {e}");
                i18n::detect_locale()
            }
        };
        tracing::info!(locale = locale.tag(), "Chrome language selected");
        entities.i18n.update(cx, |state, cx| {
            state.set_locale(locale);
            cx.notify();
        });

        // Create main window
        let bounds = Bounds::centered(None, gpui::size(px(1280.0), px(860.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("LoL Meta AI")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let window = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        });
        if let Err(e) = window {
            tracing::error!("Failed to open window: {e}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

//! Header Component
//!
//! The landing header with logo, title, navigation links, and language
//! switcher. The navigation links are inert: their targets are `#` and
//! activating one changes nothing.

use gpui::{
    div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::domain::content::{NavLink, NAV_LINKS};
use crate::domain::prefs::UiPrefs;
use crate::i18n::t;
use crate::theme::colors::LandingColors;
use crate::utils::config_store;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_link(&self, link: NavLink, cx: &Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let label = t(locale, link.label_key);

        div()
            .id(link.label_key)
            .px_2()
            .py_1()
            .text_sm()
            .font_weight(gpui::FontWeight::MEDIUM)
            .text_color(LandingColors::foreground())
            .cursor_pointer()
            .hover(|s| s.text_color(LandingColors::primary()))
            .on_click(move |_event: &ClickEvent, _window, _cx| {
                // Target is "#": activating the link goes nowhere.
                tracing::debug!(target_href = link.target, "inert nav link activated");
            })
            .child(label)
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let title = t(locale, "app-title");
        let lang_label = locale.display_name();

        let entities = self.entities.clone();

        div()
            .h(px(56.0))
            .w_full()
            .bg(LandingColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_6()
            // Left side: Logo and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    // Logo block
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_md()
                            .bg(LandingColors::primary())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(LandingColors::button_primary_text())
                            .font_weight(gpui::FontWeight::BOLD)
                            .child("L"),
                    )
                    .child(
                        div()
                            .text_color(LandingColors::primary())
                            .text_size(px(20.0))
                            .font_weight(gpui::FontWeight::BOLD)
                            .child(title),
                    ),
            )
            // Right side: Navigation and language switcher
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_6()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .children(NAV_LINKS.map(|link| self.render_nav_link(link, cx))),
                    )
                    // Language switcher
                    .child(
                        div()
                            .id("lang-switcher")
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .bg(LandingColors::chrome_hover())
                            .text_color(LandingColors::foreground())
                            .text_size(px(13.0))
                            .cursor_pointer()
                            .hover(|s| s.bg(LandingColors::card_bg_hover()))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                entities.i18n.update(cx, |i18n, cx| {
                                    i18n.toggle_locale();
                                    cx.notify();
                                });
                                let locale = entities.i18n.read(cx).locale;
                                if let Err(e) = config_store::save_prefs(
                                    "prefs.json",
                                    &UiPrefs::with_locale(locale),
                                ) {
                                    tracing::warn!("Failed to save language preference: {e}");
                                }
                            })
                            .child(lang_label),
                    ),
            )
    }
}

//! Landing Page
//!
//! The single screen of the application: hero section, search bar, feature
//! grid, stats panel. Rendering is a pure function of the search text and
//! the static catalogs in `domain::content`.

use gpui::{
    div, prelude::*, px, svg, ClickEvent, Context, Entity, InteractiveElement, IntoElement,
    ParentElement, Render, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::assets::CustomIconName;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::content::{
    FeatureDescriptor, StatTile, FEATURES, HERO_BRAND, HERO_SUBTITLE, HERO_TAGLINE, STATS,
};
use crate::features::landing::controller::LandingController;
use crate::i18n::t;
use crate::theme::colors::LandingColors;
use crate::theme::typography::Typography;

/// Landing page component
pub struct LandingPage {
    entities: AppEntities,
    controller: LandingController,
    search_input: Entity<TextInput>,
}

impl LandingPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = LandingController::new(entities.clone());
        let locale = entities.i18n.read(cx).locale;

        // Search field; mounts with the current (empty) query and every
        // keystroke replaces the query state.
        let search_input = text_input("landing-search", t(locale, "search-placeholder"), cx);
        let input_controller = LandingController::new(entities.clone());
        let initial_query = entities.search.read(cx).query().to_string();
        search_input.update(cx, |input, _cx| {
            input.set_value(initial_query);
            input.on_change(move |text, cx| {
                input_controller.set_query(text, cx);
            });
        });

        // Keep the placeholder in sync with the chrome language.
        let input = search_input.clone();
        cx.observe(&entities.i18n, move |_this, i18n, cx| {
            let locale = i18n.read(cx).locale;
            input.update(cx, |input, cx| {
                input.set_placeholder(t(locale, "search-placeholder"));
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        Self {
            entities,
            controller,
            search_input,
        }
    }

    fn render_feature_card(&self, feature: FeatureDescriptor) -> impl IntoElement {
        div()
            .id(feature.title)
            .flex_1()
            .bg(LandingColors::card_bg())
            .rounded_xl()
            .p_8()
            .flex()
            .flex_col()
            .items_center()
            .gap_4()
            .hover(|s| s.bg(LandingColors::card_bg_hover()))
            .child(
                svg()
                    .path(feature.icon.path())
                    .size(px(32.0))
                    .text_color(LandingColors::primary()),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_XL))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(LandingColors::foreground())
                    .child(feature.title),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(LandingColors::text_muted())
                    .child(feature.description),
            )
    }

    fn render_stat_tile(&self, stat: StatTile) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .flex_col()
            .items_center()
            .gap_2()
            .child(
                div()
                    .text_size(px(Typography::TEXT_3XL))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(LandingColors::primary())
                    .child(stat.value),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(LandingColors::text_muted())
                    .child(stat.caption),
            )
    }

    fn render_hero(&self) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .items_center()
            .gap_6()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_HERO))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(LandingColors::primary())
                            .child(HERO_BRAND),
                    )
                    .child(
                        div()
                            .text_size(px(40.0))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(LandingColors::foreground())
                            .child(HERO_SUBTITLE),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_1()
                    .text_size(px(Typography::TEXT_LG))
                    .text_color(LandingColors::text_muted())
                    .children(HERO_TAGLINE.map(|line| div().child(line))),
            )
    }

    fn render_search_bar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        div()
            .w(px(640.0))
            .flex()
            .items_center()
            .gap_2()
            .pl_4()
            .pr_2()
            .py_2()
            .bg(LandingColors::card_bg())
            .rounded_full()
            .child(
                svg()
                    .path(CustomIconName::Search.path())
                    .size(px(18.0))
                    .text_color(LandingColors::text_muted()),
            )
            .child(self.search_input.clone())
            .child(
                Button::primary("search-btn", t(locale, "action-search")).on_click(cx.listener(
                    |this, _event: &ClickEvent, _window, cx| {
                        this.controller.submit_search(cx);
                    },
                )),
            )
    }

    fn render_cta_row(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        div()
            .flex()
            .items_center()
            .gap_4()
            .child(
                Button::primary("start-analysis-btn", t(locale, "action-start-analysis"))
                    .size(ButtonSize::Large)
                    .icon_left(CustomIconName::Sparkles)
                    .icon_right(CustomIconName::ArrowRight)
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, _cx| {
                        this.controller.activate_cta("start-analysis");
                    })),
            )
            .child(
                Button::secondary("view-demo-btn", t(locale, "action-view-demo"))
                    .size(ButtonSize::Large)
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, _cx| {
                        this.controller.activate_cta("view-demo");
                    })),
            )
    }
}

impl Render for LandingPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("landing-page")
            .w_full()
            .flex()
            .flex_col()
            .items_center()
            .px_6()
            .py_16()
            .gap_12()
            // Hero section
            .child(self.render_hero())
            // Search bar (no backend; typing only updates the field)
            .child(self.render_search_bar(cx))
            // Call-to-action buttons
            .child(self.render_cta_row(cx))
            // Feature grid: always exactly three cards, fixed order
            .child(
                div()
                    .w_full()
                    .max_w(px(1024.0))
                    .flex()
                    .gap_8()
                    .children(FEATURES.map(|feature| self.render_feature_card(feature))),
            )
            // Stats panel: four static tiles
            .child(
                div()
                    .w_full()
                    .max_w(px(1024.0))
                    .bg(LandingColors::stats_bg())
                    .rounded_xl()
                    .p_8()
                    .flex()
                    .children(STATS.map(|stat| self.render_stat_tile(stat))),
            )
    }
}

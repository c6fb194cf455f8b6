//! Footer Component

use gpui::{div, prelude::*, px, Context, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::i18n::t;
use crate::theme::colors::LandingColors;
use crate::theme::typography::Typography;

/// Footer with static copyright text
pub struct Footer {
    entities: AppEntities,
}

impl Footer {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Footer {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        div()
            .w_full()
            .px_6()
            .py_8()
            .flex()
            .flex_col()
            .items_center()
            .gap_2()
            .text_color(LandingColors::text_muted())
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .child(t(locale, "footer-copyright")),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .child(t(locale, "footer-disclaimer")),
            )
    }
}

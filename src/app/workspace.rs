//! Workspace - Main Shell
//!
//! The workspace is the window-level container: header on top, the landing
//! page and footer in a scrollable column below.

use gpui::{
    div, prelude::*, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::layout::footer::Footer;
use crate::components::layout::header::Header;
use crate::features::landing::page::LandingPage;
use crate::theme::colors::LandingColors;

/// Main workspace containing the application layout
pub struct Workspace {
    header: Entity<Header>,
    landing: Entity<LandingPage>,
    footer: Entity<Footer>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let landing = cx.new(|cx| LandingPage::new(entities.clone(), cx));
        let footer = cx.new(|cx| Footer::new(entities.clone(), cx));

        Self {
            header,
            landing,
            footer,
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(LandingColors::background())
            .text_color(LandingColors::foreground())
            .child(self.header.clone())
            .child(
                div()
                    .id("landing-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .child(self.landing.clone())
                    .child(self.footer.clone()),
            )
    }
}

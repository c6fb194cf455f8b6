//! Button Component

use gpui::{
    div, prelude::*, px, svg, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::assets::CustomIconName;
use crate::theme::colors::LandingColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (gold)
    #[default]
    Primary,
    /// Secondary button (card background)
    Secondary,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Medium button (default)
    #[default]
    Medium,
    /// Large button
    Large,
}

/// A pill-shaped styled button
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    icon_left: Option<CustomIconName>,
    icon_right: Option<CustomIconName>,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            icon_left: None,
            icon_right: None,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Add an icon before the label
    pub fn icon_left(mut self, icon: CustomIconName) -> Self {
        self.icon_left = Some(icon);
        self
    }

    /// Add an icon after the label
    pub fn icon_right(mut self, icon: CustomIconName) -> Self {
        self.icon_right = Some(icon);
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create a secondary button
    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    fn render_icon(icon: CustomIconName, color: gpui::Rgba, size: gpui::Pixels) -> impl IntoElement {
        svg().path(icon.path()).size(size).text_color(color)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                LandingColors::primary(),
                LandingColors::button_primary_text(),
                LandingColors::primary_hover(),
            ),
            ButtonVariant::Secondary => (
                LandingColors::card_bg(),
                LandingColors::foreground(),
                LandingColors::card_bg_hover(),
            ),
        };

        let (padding_x, padding_y, font_size, icon_size) = match self.size {
            ButtonSize::Medium => (px(24.0), px(8.0), px(14.0), px(16.0)),
            ButtonSize::Large => (px(32.0), px(12.0), px(16.0), px(20.0)),
        };

        let mut element = div()
            .id(self.id)
            .px(padding_x)
            .py(padding_y)
            .bg(bg_color)
            .text_color(text_color)
            .text_size(font_size)
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .rounded_full()
            .cursor_pointer()
            .flex()
            .items_center()
            .justify_center()
            .gap_2()
            .hover(move |s| s.bg(hover_bg));

        if let Some(icon) = self.icon_left {
            element = element.child(Self::render_icon(icon, text_color, icon_size));
        }

        element = element.child(self.label);

        if let Some(icon) = self.icon_right {
            element = element.child(Self::render_icon(icon, text_color, icon_size));
        }

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}

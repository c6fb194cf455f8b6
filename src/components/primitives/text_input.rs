//! TextInput Component

use gpui::{
    div, prelude::*, px, ClickEvent, Context, ElementId, Entity, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::LandingColors;

/// A text input component
pub struct TextInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    focus_handle: FocusHandle,
    on_change: Option<Box<dyn Fn(&str, &mut Context<Self>) + 'static>>,
}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            focus_handle: cx.focus_handle(),
            on_change: None,
        }
    }

    /// Set the value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Get the value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    /// Set the change handler
    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    /// Handle a keystroke while focused
    fn handle_key_down(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        if !apply_keystroke(&mut self.value, &keystroke.key, keystroke.key_char.as_deref()) {
            return;
        }

        if let Some(ref handler) = self.on_change {
            handler(&self.value, cx);
        }
        cx.notify();
    }
}

/// Apply one keystroke to a text buffer. Returns false when the keystroke
/// does not edit the text.
fn apply_keystroke(value: &mut String, key: &str, key_char: Option<&str>) -> bool {
    if key == "backspace" {
        value.pop().is_some()
    } else if let Some(text) = key_char {
        value.push_str(text);
        true
    } else {
        false
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            LandingColors::input_border_focus()
        } else {
            LandingColors::input_border()
        };

        let display_text = if self.value.is_empty() {
            self.placeholder.clone()
        } else {
            SharedString::from(self.value.clone())
        };

        let text_color = if self.value.is_empty() {
            LandingColors::input_placeholder()
        } else {
            LandingColors::foreground()
        };

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.handle_key_down(event, cx);
            }))
            .on_click(cx.listener(|this, _event: &ClickEvent, window, _cx| {
                window.focus(&this.focus_handle);
            }))
            .cursor_text()
            .px_3()
            .py_2()
            .flex_1()
            .bg(LandingColors::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_full()
            .text_color(text_color)
            .text_sm()
            .min_w(px(200.0))
            .child(display_text)
    }
}

/// Create a text input entity with an initial placeholder
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    placeholder: impl Into<SharedString>,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let id = id.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = TextInput::new(id, cx);
        input.set_placeholder(placeholder);
        input
    })
}

#[cfg(test)]
mod tests {
    use super::apply_keystroke;

    #[test]
    fn typing_appends_each_character() {
        let mut value = String::new();
        for ch in ["A", "h", "r", "i"] {
            assert!(apply_keystroke(&mut value, ch, Some(ch)));
        }
        assert_eq!(value, "Ahri");
    }

    #[test]
    fn backspace_removes_last_character() {
        let mut value = String::from("Ahri");
        assert!(apply_keystroke(&mut value, "backspace", None));
        assert_eq!(value, "Ahr");
    }

    #[test]
    fn backspace_on_empty_is_ignored() {
        let mut value = String::new();
        assert!(!apply_keystroke(&mut value, "backspace", None));
        assert_eq!(value, "");
    }

    #[test]
    fn non_editing_keys_leave_value_unchanged() {
        let mut value = String::from("Ahri");
        assert!(!apply_keystroke(&mut value, "escape", None));
        assert_eq!(value, "Ahri");
    }
}

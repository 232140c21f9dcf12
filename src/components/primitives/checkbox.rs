//! Checkbox Component
//!
//! Tri-state checkbox. The indeterminate state is only a rendering of the
//! value passed in; clicking always reports a plain boolean.

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::assets::IconName;
use crate::domain::CheckState;
use crate::theme::colors::ArkemColors;
use crate::theme::typography::Typography;

/// A checkbox component
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    state: CheckState,
    label: Option<SharedString>,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            state: CheckState::Unchecked,
            label: None,
            disabled: false,
            on_change: None,
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.state = CheckState::from_checked(checked);
        self
    }

    /// Set the full tri-state value
    pub fn state(mut self, state: CheckState) -> Self {
        self.state = state;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the change handler; receives the requested checked value
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let state = self.state;
        let filled = state != CheckState::Unchecked;

        let mark = match state {
            CheckState::Checked => Some(IconName::Check),
            CheckState::Indeterminate => Some(IconName::Minus),
            CheckState::Unchecked => None,
        };

        let mut checkbox = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .size(px(16.0))
                    .rounded_sm()
                    .border_1()
                    .border_color(if filled {
                        ArkemColors::checkbox_fill()
                    } else {
                        ArkemColors::checkbox_border()
                    })
                    .when(filled, |el| el.bg(ArkemColors::checkbox_fill()))
                    .flex()
                    .items_center()
                    .justify_center()
                    .when_some(mark, |el, mark| {
                        el.child(Icon::from(mark).size_3().text_color(ArkemColors::text_on_accent()))
                    }),
            )
            .when_some(self.label, |el, label| {
                el.child(
                    div()
                        .text_size(px(Typography::TEXT_SM))
                        .text_color(ArkemColors::text_primary())
                        .child(label),
                )
            });

        checkbox = if self.disabled {
            checkbox.opacity(0.5)
        } else {
            checkbox.cursor_pointer()
        };

        let handler = self.on_change.filter(|_| !self.disabled);
        checkbox.on_click(move |_event, window, cx| {
            // Swallowed even when disabled so clickable ancestors such as table rows never see it
            cx.stop_propagation();
            if let Some(handler) = &handler {
                handler(!state.is_checked(), window, cx);
            }
        })
    }
}

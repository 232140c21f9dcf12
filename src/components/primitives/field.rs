//! Field Component
//!
//! Read-only label/value pair.

use gpui::{div, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window};

use crate::theme::colors::ArkemColors;
use crate::theme::typography::Typography;

#[derive(IntoElement)]
pub struct Field {
    label: SharedString,
    value: SharedString,
}

impl Field {
    pub fn new(label: impl Into<SharedString>, value: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl RenderOnce for Field {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(ArkemColors::text_muted())
                    .child(self.label),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(ArkemColors::text_primary())
                    .child(self.value),
            )
    }
}

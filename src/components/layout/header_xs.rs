//! HeaderXs Component
//!
//! Extra-small section header with an optional status icon.

use gpui::{
    div, prelude::*, px, App, FontWeight, IntoElement, ParentElement, RenderOnce, Rgba,
    SharedString, Styled, Window,
};
use gpui_component::Icon;

use crate::assets::IconName;
use crate::theme::colors::ArkemColors;
use crate::theme::typography::Typography;

/// Status variant shared by headers and toasts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusVariant {
    #[default]
    Default,
    Success,
    Warning,
    Error,
    Info,
}

impl StatusVariant {
    pub fn all() -> &'static [StatusVariant] {
        &[
            StatusVariant::Default,
            StatusVariant::Success,
            StatusVariant::Warning,
            StatusVariant::Error,
            StatusVariant::Info,
        ]
    }

    /// Icon shown when no explicit icon is given
    pub fn default_icon(self) -> IconName {
        match self {
            StatusVariant::Default | StatusVariant::Info => IconName::Info,
            StatusVariant::Success => IconName::CheckCircle,
            StatusVariant::Warning => IconName::AlertTriangle,
            StatusVariant::Error => IconName::XCircle,
        }
    }

    pub fn color(self) -> Rgba {
        match self {
            StatusVariant::Default => ArkemColors::text_primary(),
            StatusVariant::Success => ArkemColors::success(),
            StatusVariant::Warning => ArkemColors::warning(),
            StatusVariant::Error => ArkemColors::danger(),
            StatusVariant::Info => ArkemColors::info(),
        }
    }
}

#[derive(IntoElement)]
pub struct HeaderXs {
    text: SharedString,
    variant: StatusVariant,
    leading_icon: bool,
    icon: Option<IconName>,
}

impl HeaderXs {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            variant: StatusVariant::default(),
            leading_icon: false,
            icon: None,
        }
    }

    pub fn variant(mut self, variant: StatusVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Show the variant icon before the text
    pub fn leading_icon(mut self, show: bool) -> Self {
        self.leading_icon = show;
        self
    }

    /// Replace the variant's default icon
    pub fn icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    /// The icon that will be drawn, if any
    pub fn resolved_icon(&self) -> Option<IconName> {
        self.leading_icon
            .then(|| self.icon.unwrap_or(self.variant.default_icon()))
    }
}

impl RenderOnce for HeaderXs {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let color = self.variant.color();
        let icon = self.resolved_icon();

        div()
            .flex()
            .items_center()
            .gap_1p5()
            .when_some(icon, |el, icon| {
                el.child(Icon::from(icon).size_4().text_color(color))
            })
            .child(
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(color)
                    .child(self.text),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_have_default_icons() {
        assert_eq!(StatusVariant::Default.default_icon(), IconName::Info);
        assert_eq!(StatusVariant::Info.default_icon(), IconName::Info);
        assert_eq!(StatusVariant::Success.default_icon(), IconName::CheckCircle);
        assert_eq!(StatusVariant::Warning.default_icon(), IconName::AlertTriangle);
        assert_eq!(StatusVariant::Error.default_icon(), IconName::XCircle);
    }

    #[test]
    fn icon_is_hidden_unless_requested() {
        let header = HeaderXs::new("Title").variant(StatusVariant::Error);
        assert_eq!(header.resolved_icon(), None);
        let header = header.leading_icon(true);
        assert_eq!(header.resolved_icon(), Some(IconName::XCircle));
    }

    #[test]
    fn explicit_icon_overrides_variant() {
        let header = HeaderXs::new("Title")
            .variant(StatusVariant::Success)
            .leading_icon(true)
            .icon(IconName::Globe);
        assert_eq!(header.resolved_icon(), Some(IconName::Globe));
    }
}

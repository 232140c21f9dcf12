//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, Pixels, Rgba, RenderOnce, SharedString, StatefulInteractiveElement, Styled,
    Window,
};
use gpui_component::Icon;

use crate::assets::IconName;
use crate::theme::colors::ArkemColors;

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button (default)
    #[default]
    Medium,
    /// Large button
    Large,
}

impl ButtonSize {
    /// Horizontal padding, vertical padding, font size
    fn metrics(&self) -> (Pixels, Pixels, Pixels) {
        match self {
            ButtonSize::Small => (px(8.0), px(4.0), px(12.0)),
            ButtonSize::Medium => (px(12.0), px(6.0), px(13.0)),
            ButtonSize::Large => (px(20.0), px(10.0), px(15.0)),
        }
    }
}

/// Visual weight of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonHierarchy {
    /// Filled, high emphasis
    Primary,
    /// Toned background, medium emphasis
    Secondary,
    /// Mode switch; always rendered in the black tone
    Mode,
}

/// Color family of a button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonTone {
    Black,
    #[default]
    Grey,
    Color,
}

/// Hierarchy and tone after defaults are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLook {
    pub hierarchy: ButtonHierarchy,
    pub tone: ButtonTone,
}

impl ButtonLook {
    /// Small and medium buttons default to secondary, large ones to primary.
    pub fn resolve(size: ButtonSize, hierarchy: Option<ButtonHierarchy>, tone: ButtonTone) -> Self {
        let hierarchy = hierarchy.unwrap_or(match size {
            ButtonSize::Small | ButtonSize::Medium => ButtonHierarchy::Secondary,
            ButtonSize::Large => ButtonHierarchy::Primary,
        });
        let tone = if hierarchy == ButtonHierarchy::Mode {
            ButtonTone::Black
        } else {
            tone
        };
        Self { hierarchy, tone }
    }

    /// Background and text colors
    fn colors(&self) -> (Rgba, Rgba) {
        match (self.hierarchy, self.tone) {
            (ButtonHierarchy::Primary, ButtonTone::Color) => {
                (ArkemColors::button_color_bg(), ArkemColors::text_on_accent())
            }
            (ButtonHierarchy::Primary, _) => {
                (ArkemColors::button_primary_bg(), ArkemColors::button_primary_text())
            }
            (_, ButtonTone::Black) => (ArkemColors::button_black_bg(), ArkemColors::text_primary()),
            (_, ButtonTone::Grey) => (ArkemColors::button_grey_bg(), ArkemColors::text_primary()),
            (_, ButtonTone::Color) => (ArkemColors::accent_subtle(), ArkemColors::accent()),
        }
    }
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: Option<SharedString>,
    size: ButtonSize,
    hierarchy: Option<ButtonHierarchy>,
    tone: ButtonTone,
    leading_icon: Option<IconName>,
    trailing_icon: Option<IconName>,
    full_width: bool,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::icon(id).label(label)
    }

    /// Create a button without a label
    pub fn icon(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            label: None,
            size: ButtonSize::default(),
            hierarchy: None,
            tone: ButtonTone::default(),
            leading_icon: None,
            trailing_icon: None,
            full_width: false,
            disabled: false,
            on_click: None,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Override the hierarchy derived from the size
    pub fn hierarchy(mut self, hierarchy: ButtonHierarchy) -> Self {
        self.hierarchy = Some(hierarchy);
        self
    }

    pub fn tone(mut self, tone: ButtonTone) -> Self {
        self.tone = tone;
        self
    }

    pub fn leading_icon(mut self, icon: IconName) -> Self {
        self.leading_icon = Some(icon);
        self
    }

    pub fn trailing_icon(mut self, icon: IconName) -> Self {
        self.trailing_icon = Some(icon);
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// True when the button shows icons and no label
    pub fn is_icon_only(&self) -> bool {
        self.label.is_none() && (self.leading_icon.is_some() || self.trailing_icon.is_some())
    }

    pub fn look(&self) -> ButtonLook {
        ButtonLook::resolve(self.size, self.hierarchy, self.tone)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color) = self.look().colors();
        let (padding_x, padding_y, font_size) = self.size.metrics();
        let icon_only = self.is_icon_only();

        let icon = move |name: IconName| Icon::from(name).size(font_size).text_color(text_color);

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .gap_1p5()
            .px(if icon_only { padding_y } else { padding_x })
            .py(padding_y)
            .bg(bg_color)
            .text_color(text_color)
            .text_size(font_size)
            .rounded_md()
            .when(self.full_width, |el| el.w_full())
            .when_some(self.leading_icon, |el, name| el.child(icon(name)))
            .when_some(self.label, |el, label| el.child(label))
            .when_some(self.trailing_icon, |el, name| el.child(icon(name)));

        if self.disabled {
            element = element.opacity(0.5);
        } else {
            element = element
                .cursor_pointer()
                .hover(|s| s.bg(ArkemColors::button_hover_overlay()));
        }

        let handler = self.on_click.filter(|_| !self.disabled);
        element.on_click(move |event, window, cx| {
            // Buttons own their clicks, with or without a handler
            cx.stop_propagation();
            if let Some(handler) = &handler {
                handler(event, window, cx);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hierarchy_follows_size_by_default() {
        let small = ButtonLook::resolve(ButtonSize::Small, None, ButtonTone::Grey);
        let medium = ButtonLook::resolve(ButtonSize::Medium, None, ButtonTone::Grey);
        let large = ButtonLook::resolve(ButtonSize::Large, None, ButtonTone::Grey);
        assert_eq!(small.hierarchy, ButtonHierarchy::Secondary);
        assert_eq!(medium.hierarchy, ButtonHierarchy::Secondary);
        assert_eq!(large.hierarchy, ButtonHierarchy::Primary);
    }

    #[test]
    fn explicit_hierarchy_wins() {
        let look = ButtonLook::resolve(ButtonSize::Large, Some(ButtonHierarchy::Secondary), ButtonTone::Color);
        assert_eq!(look.hierarchy, ButtonHierarchy::Secondary);
        assert_eq!(look.tone, ButtonTone::Color);
    }

    #[test]
    fn mode_forces_black_tone() {
        let look = ButtonLook::resolve(ButtonSize::Small, Some(ButtonHierarchy::Mode), ButtonTone::Color);
        assert_eq!(look.tone, ButtonTone::Black);
    }

    #[test]
    fn icon_only_needs_an_icon_and_no_label() {
        assert!(Button::icon("a").leading_icon(IconName::Pencil).is_icon_only());
        assert!(!Button::new("b", "Edit").leading_icon(IconName::Pencil).is_icon_only());
        assert!(!Button::icon("c").is_icon_only());
    }
}

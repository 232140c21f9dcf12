//! Badge Component
//!
//! Small rounded chip, used for user roles.

use gpui::{div, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window};

use crate::domain::UserRole;
use crate::theme::colors::ArkemColors;
use crate::theme::typography::Typography;

/// Badge color variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    Admin,
    #[default]
    User,
}

impl From<UserRole> for BadgeVariant {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => BadgeVariant::Admin,
            UserRole::User => BadgeVariant::User,
        }
    }
}

#[derive(IntoElement)]
pub struct Badge {
    label: SharedString,
    variant: BadgeVariant,
}

impl Badge {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            variant: BadgeVariant::default(),
        }
    }

    /// Badge showing a role with its matching variant
    pub fn role(role: UserRole) -> Self {
        Self::new(role.as_str()).variant(role.into())
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, text) = match self.variant {
            BadgeVariant::Admin => (ArkemColors::badge_admin_bg(), ArkemColors::badge_admin_text()),
            BadgeVariant::User => (ArkemColors::badge_user_bg(), ArkemColors::badge_user_text()),
        };

        div()
            .px_2()
            .py(px(2.0))
            .rounded_full()
            .bg(bg)
            .text_color(text)
            .text_size(px(Typography::TEXT_XS))
            .child(self.label)
    }
}

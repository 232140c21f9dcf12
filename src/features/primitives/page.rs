//! Primitives Page
//!
//! Checkbox, badge, button and field gallery.

use gpui::{div, Context, IntoElement, ParentElement, Render, SharedString, Styled, Window};

use crate::app::entities::AppEntities;
use crate::assets::IconName;
use crate::components::layout::HeaderXs;
use crate::components::primitives::{
    Badge, Button, ButtonHierarchy, ButtonSize, ButtonTone, Checkbox, Field,
};
use crate::domain::{CheckState, UserRole};
use crate::i18n::t;

/// Primitives story page
pub struct PrimitivesPage {
    entities: AppEntities,
}

impl PrimitivesPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.gallery, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn section(title: &'static str) -> gpui::Div {
        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(HeaderXs::new(title))
    }

    fn row() -> gpui::Div {
        div().flex().items_center().gap_4()
    }

    fn render_checkboxes(&self, demo: CheckState) -> impl IntoElement {
        let entities = self.entities.clone();

        Self::section("Checkbox").child(
            Self::row()
                .child(Checkbox::new("cb-unchecked").label("Unchecked"))
                .child(Checkbox::new("cb-checked").checked(true).label("Checked"))
                .child(
                    Checkbox::new("cb-indeterminate")
                        .state(CheckState::Indeterminate)
                        .label("Indeterminate"),
                )
                .child(
                    Checkbox::new("cb-disabled")
                        .checked(true)
                        .disabled(true)
                        .label("Disabled"),
                )
                .child(
                    Checkbox::new("cb-interactive")
                        .state(demo)
                        .label("Click to cycle")
                        .on_change(move |_checked, _window, cx| {
                            entities.gallery.update(cx, |gallery, cx| {
                                gallery.cycle_demo_check();
                                cx.notify();
                            });
                        }),
                ),
        )
    }

    fn render_buttons(&self) -> impl IntoElement {
        let sizes = [
            ("sm", ButtonSize::Small),
            ("md", ButtonSize::Medium),
            ("lg", ButtonSize::Large),
        ];
        let tones = [
            ("black", ButtonTone::Black),
            ("grey", ButtonTone::Grey),
            ("color", ButtonTone::Color),
        ];

        Self::section("Button")
            .children(tones.iter().map(|&(tone_name, tone)| {
                Self::row().children(sizes.iter().map(move |&(size_name, size)| {
                    Button::new(
                        SharedString::from(format!("btn-{tone_name}-{size_name}")),
                        format!("{tone_name} {size_name}"),
                    )
                        .size(size)
                        .tone(tone)
                }))
            }))
            .child(
                Self::row()
                    .child(
                        Button::new("btn-mode", "Mode")
                            .hierarchy(ButtonHierarchy::Mode)
                            .tone(ButtonTone::Color),
                    )
                    .child(
                        Button::new("btn-leading", "Download")
                            .leading_icon(IconName::Download),
                    )
                    .child(
                        Button::new("btn-trailing", "Next")
                            .trailing_icon(IconName::ChevronRight),
                    )
                    .child(Button::icon("btn-icon-only").leading_icon(IconName::Pencil))
                    .child(Button::new("btn-disabled", "Disabled").disabled(true)),
            )
            .child(
                div()
                    .w_96()
                    .child(
                        Button::new("btn-full", "Full width")
                            .size(ButtonSize::Large)
                            .full_width(true),
                    ),
            )
    }
}

impl Render for PrimitivesPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let demo = self.entities.gallery.read(cx).demo_check;

        div()
            .flex()
            .flex_col()
            .gap_6()
            .child(HeaderXs::new(t(locale, "story-primitives")).leading_icon(true))
            .child(self.render_checkboxes(demo))
            .child(
                Self::section("Badge").child(
                    Self::row()
                        .child(Badge::role(UserRole::Admin))
                        .child(Badge::role(UserRole::User)),
                ),
            )
            .child(self.render_buttons())
            .child(
                Self::section("Field").child(
                    Self::row()
                        .gap_8()
                        .child(Field::new(t(locale, "col-user-id"), "10293847"))
                        .child(Field::new(t(locale, "col-time-window"), "30"))
                        .child(Field::new(t(locale, "col-role"), UserRole::Admin.as_str())),
                ),
            )
    }
}

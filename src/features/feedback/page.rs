//! Feedback Page
//!
//! Status headers in every variant and toast compositions.

use gpui::{div, prelude::*, Context, IntoElement, ParentElement, Render, Styled, Window};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::components::composite::{Toast, ToastData};
use crate::components::layout::{HeaderXs, StatusVariant};
use crate::components::primitives::{Button, ButtonSize};
use crate::i18n::t;

/// Feedback story page
pub struct FeedbackPage {
    entities: AppEntities,
}

fn sample_data() -> Vec<ToastData> {
    vec![
        ToastData::new("BEHAVIOUR", "Repetitive route traversal and synchronized dwell."),
        ToastData::new("ROUTE OVERLAP", "3/4 Incidents"),
        ToastData::new("TIME RANGE", "11:00 PM - 3:00 AM"),
    ]
}

impl FeedbackPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.gallery, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn set_toast_visible(entities: &AppEntities, visible: bool, cx: &mut gpui::App) {
        entities.gallery.update(cx, |gallery, cx| {
            debug!(visible, "Toast visibility changed");
            gallery.toast_visible = visible;
            cx.notify();
        });
    }

    fn render_headers() -> impl IntoElement {
        div()
            .flex()
            .gap_8()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .children(StatusVariant::all().iter().map(|&variant| {
                        HeaderXs::new(format!("{variant:?}")).variant(variant)
                    })),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .children(StatusVariant::all().iter().map(|&variant| {
                        HeaderXs::new(format!("{variant:?} with icon"))
                            .variant(variant)
                            .leading_icon(true)
                    })),
            )
    }
}

impl Render for FeedbackPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let toast_visible = self.entities.gallery.read(cx).toast_visible;

        let close_entities = self.entities.clone();
        let show_entities = self.entities.clone();

        div()
            .flex()
            .flex_col()
            .gap_6()
            .child(HeaderXs::new(t(locale, "story-feedback")).leading_icon(true))
            .child(Self::render_headers())
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_4()
                    .child(
                        Toast::new()
                            .title("Pattern Detected")
                            .message("Same 2 devices appear across 3 burglary scenes within 5 hours.")
                            .data(sample_data()),
                    )
                    .child(
                        Toast::new()
                            .title("Export Ready")
                            .variant(StatusVariant::Success)
                            .leading_icon(true)
                            .message("The access report has been generated.")
                            .data(sample_data())
                            .data_rows(1),
                    )
                    .child(
                        Toast::new()
                            .title("Connection Lost")
                            .variant(StatusVariant::Error)
                            .leading_icon(true),
                    )
                    .child(
                        Toast::new()
                            .variant(StatusVariant::Warning)
                            .message("Record limit almost reached.")
                            .data(sample_data())
                            .data_rows(0),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .when(toast_visible, |el| {
                        el.child(
                            Toast::new()
                                .title("Dismissible")
                                .variant(StatusVariant::Info)
                                .leading_icon(true)
                                .message("Close this toast with the button in its corner.")
                                .on_close(move |_window, cx| {
                                    Self::set_toast_visible(&close_entities, false, cx)
                                }),
                        )
                    })
                    .when(!toast_visible, |el| {
                        el.child(
                            Button::new("show-toast", t(locale, "action-show-toast"))
                                .size(ButtonSize::Small)
                                .on_click(move |_event, _window, cx| {
                                    Self::set_toast_visible(&show_entities, true, cx)
                                }),
                        )
                    }),
            )
    }
}

//! Header Component
//!
//! The application header with logo, title, active story and language switcher.

use gpui::{
    div, px, ClickEvent, Context, FontWeight, InteractiveElement, IntoElement, ParentElement,
    Render, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::constants::HEADER_HEIGHT;
use crate::i18n::t;
use crate::theme::colors::ArkemColors;
use crate::theme::typography::Typography;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.gallery, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let story = self.entities.gallery.read(cx).active;
        let title = t(locale, "app-title");
        let story_title = t(locale, story.title_key());
        let lang_label = locale.toggled().display_name();

        let entities = self.entities.clone();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex_shrink_0()
            .bg(ArkemColors::header_bg())
            .border_b_1()
            .border_color(ArkemColors::border())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Logo, title and current story
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(28.0))
                            .rounded_md()
                            .bg(ArkemColors::accent())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(ArkemColors::text_on_accent())
                            .font_weight(FontWeight::BOLD)
                            .child("A"),
                    )
                    .child(
                        div()
                            .text_color(ArkemColors::text_primary())
                            .text_size(px(Typography::TEXT_LG))
                            .font_weight(FontWeight::SEMIBOLD)
                            .child(title),
                    )
                    .child(
                        div()
                            .text_color(ArkemColors::text_muted())
                            .text_size(px(Typography::TEXT_SM))
                            .child("/"),
                    )
                    .child(
                        div()
                            .text_color(ArkemColors::text_secondary())
                            .text_size(px(Typography::TEXT_SM))
                            .child(story_title),
                    ),
            )
            // Language switcher
            .child(
                div()
                    .id("lang-switcher")
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .bg(ArkemColors::surface_raised())
                    .text_color(ArkemColors::text_primary())
                    .text_size(px(13.0))
                    .cursor_pointer()
                    .hover(|s| s.bg(ArkemColors::table_row_hover()))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        entities.toggle_locale(cx);
                    })
                    .child(lang_label),
            )
    }
}

//! Sidebar Component
//!
//! Story navigation for the gallery.

use gpui::{
    div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::app::navigation::ActiveStory;
use crate::constants::SIDEBAR_WIDTH;
use crate::helpers::action::{humanize_keystroke, story_keystroke};
use crate::i18n::{t, Locale};
use crate::theme::colors::ArkemColors;
use crate::theme::typography::Typography;

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.gallery, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(
        &self,
        story: ActiveStory,
        locale: Locale,
        active: ActiveStory,
    ) -> impl IntoElement {
        let is_active = story == active;
        let label = t(locale, story.title_key());
        let entities = self.entities.clone();

        let text_color = if is_active {
            ArkemColors::accent()
        } else {
            ArkemColors::text_secondary()
        };

        let mut item = div()
            .id(SharedString::from(format!("nav-{:?}", story)))
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .px_4()
            .py_2()
            .border_l_2()
            .text_color(text_color)
            .text_size(px(Typography::TEXT_SM))
            .cursor_pointer()
            .hover(|s| s.bg(ArkemColors::accent_subtle()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.gallery.update(cx, |gallery, cx| {
                    if gallery.select(story) {
                        debug!(story = ?story, "Story selected");
                        cx.notify();
                    }
                });
            })
            .child(Icon::from(story.icon()).size_4().text_color(text_color))
            .child(label)
            .child(
                div()
                    .ml_auto()
                    .text_size(px(Typography::TEXT_2XS))
                    .text_color(ArkemColors::text_muted())
                    .child(humanize_keystroke(story_keystroke(story))),
            );

        item = if is_active {
            item.bg(ArkemColors::accent_subtle())
                .border_color(ArkemColors::accent())
        } else {
            item.border_color(gpui::transparent_black())
        };

        item
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let active = self.entities.gallery.read(cx).active;

        div()
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .flex_shrink_0()
            .bg(ArkemColors::sidebar_bg())
            .border_r_1()
            .border_color(ArkemColors::border())
            .flex()
            .flex_col()
            .pt_4()
            .children(
                ActiveStory::all()
                    .iter()
                    .map(|story| self.render_nav_item(*story, locale, active)),
            )
    }
}

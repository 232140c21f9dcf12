//! Pagination Page
//!
//! Standalone pager variants driven by one shared current page.

use gpui::{div, px, App, Context, IntoElement, ParentElement, Render, Styled, Window};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::components::composite::Pagination;
use crate::components::layout::HeaderXs;
use crate::domain::Pager;
use crate::i18n::t;
use crate::theme::colors::ArkemColors;

/// Pagination story page
pub struct PaginationPage {
    entities: AppEntities,
}

impl PaginationPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.gallery, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.config, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn variant(&self, id: &'static str, caption: &'static str, pager: Pager) -> impl IntoElement {
        let entities = self.entities.clone();

        div()
            .flex()
            .flex_col()
            .gap_2()
            .child(HeaderXs::new(caption))
            .child(
                div()
                    .w(px(720.0))
                    .bg(ArkemColors::surface())
                    .rounded_md()
                    .child(Pagination::new(id, pager).on_page_change(
                        move |page, _window, cx: &mut App| {
                            entities.gallery.update(cx, |gallery, cx| {
                                debug!(page, "Story page changed");
                                gallery.pagination_page = page;
                                cx.notify();
                            });
                        },
                    )),
            )
    }
}

impl Render for PaginationPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let label = self.entities.config.read(cx).item_label.clone();
        let pager = self.entities.gallery.read(cx).story_pager().item_label(label);
        let current = pager.current_page();

        div()
            .flex()
            .flex_col()
            .gap_6()
            .child(HeaderXs::new(t(locale, "story-pagination")).leading_icon(true))
            .child(self.variant("pager-default", "Default", pager.clone()))
            .child(self.variant(
                "pager-compact",
                "Five page buttons",
                pager.clone().max_page_buttons(5),
            ))
            .child(self.variant(
                "pager-no-summary",
                "Without range summary",
                pager.clone().show_range_summary(false),
            ))
            .child(self.variant(
                "pager-nav-only",
                "Previous and next only",
                pager.show_page_numbers(false),
            ))
            .child(self.variant(
                "pager-empty",
                "No items",
                Pager::for_items(current, 0, 10),
            ))
    }
}

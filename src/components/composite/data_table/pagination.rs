//! Pagination Component
//!
//! Renders a [`Pager`]: range summary on the left, previous / page numbers /
//! next on the right. The component never changes pages itself; it only
//! reports the requested page.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::assets::IconName;
use crate::domain::Pager;
use crate::theme::colors::ArkemColors;
use crate::theme::typography::Typography;

type PageHandler = Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>;

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    id: SharedString,
    pager: Pager,
    on_page_change: Option<PageHandler>,
}

impl Pagination {
    /// Create a pagination bar; `id` prefixes the element ids of its buttons
    pub fn new(id: impl Into<SharedString>, pager: Pager) -> Self {
        Self {
            id: id.into(),
            pager,
            on_page_change: None,
        }
    }

    /// Set the page change handler
    pub fn on_page_change(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    fn nav_button(&self, suffix: &str, icon: IconName, target: Option<usize>) -> impl IntoElement {
        let enabled = target.is_some();
        let color = if enabled {
            ArkemColors::text_primary()
        } else {
            ArkemColors::text_muted()
        };

        let mut btn = div()
            .id(SharedString::from(format!("{}-{suffix}", self.id)))
            .size(px(28.0))
            .rounded_sm()
            .flex()
            .items_center()
            .justify_center()
            .child(Icon::from(icon).size_4().text_color(color));

        match (target, self.on_page_change.clone()) {
            (Some(page), Some(handler)) => {
                btn = btn
                    .cursor_pointer()
                    .hover(|s| s.bg(ArkemColors::table_row_hover()))
                    .on_click(move |_event: &ClickEvent, window, cx| handler(page, window, cx));
            }
            (None, _) => btn = btn.opacity(0.5),
            _ => {}
        }

        btn
    }

    fn page_button(&self, page: usize) -> impl IntoElement {
        let is_current = self.pager.is_current(page);
        let target = self.pager.request_page(page);

        let mut btn = div()
            .id(SharedString::from(format!("{}-page-{page}", self.id)))
            .min_w(px(28.0))
            .h(px(28.0))
            .px_1()
            .rounded_sm()
            .flex()
            .items_center()
            .justify_center()
            .text_size(px(Typography::TEXT_SM))
            .when(is_current, |el| {
                el.bg(ArkemColors::accent())
                    .text_color(ArkemColors::text_on_accent())
            })
            .when(!is_current, |el| el.text_color(ArkemColors::text_secondary()))
            .child(page.to_string());

        if let (Some(page), Some(handler)) = (target, self.on_page_change.clone()) {
            btn = btn
                .cursor_pointer()
                .hover(|s| s.bg(ArkemColors::table_row_hover()))
                .on_click(move |_event: &ClickEvent, window, cx| handler(page, window, cx));
        }

        btn
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let pager = &self.pager;
        let summary = pager.shows_range_summary().then(|| pager.range_summary());
        let pages = if pager.shows_page_numbers() {
            pager.page_numbers()
        } else {
            Vec::new()
        };

        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(ArkemColors::border())
            // Range summary
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(ArkemColors::text_secondary())
                    .children(summary),
            )
            // Page navigation
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .child(self.nav_button("prev", IconName::ChevronLeft, pager.request_previous()))
                    .children(pages.into_iter().map(|page| self.page_button(page)))
                    .child(self.nav_button("next", IconName::ChevronRight, pager.request_next())),
            )
    }
}

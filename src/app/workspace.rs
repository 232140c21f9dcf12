//! Workspace - Main Shell
//!
//! Holds the header, the story sidebar and the active story page.

use gpui::{
    div, prelude::*, AnyElement, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActiveStory;
use crate::components::layout::{Header, Sidebar};
use crate::features::feedback::page::FeedbackPage;
use crate::features::pagination::page::PaginationPage;
use crate::features::primitives::page::PrimitivesPage;
use crate::features::user_access::page::UserAccessPage;
use crate::theme::colors::ArkemColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    // Story pages, created on first visit
    user_access_page: Option<Entity<UserAccessPage>>,
    pagination_page: Option<Entity<PaginationPage>>,
    primitives_page: Option<Entity<PrimitivesPage>>,
    feedback_page: Option<Entity<FeedbackPage>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));

        cx.observe(&entities.gallery, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            header,
            sidebar,
            user_access_page: None,
            pagination_page: None,
            primitives_page: None,
            feedback_page: None,
        }
    }

    /// Get or create the page view for `story`
    fn get_or_create_page(&mut self, story: ActiveStory, cx: &mut Context<Self>) -> AnyElement {
        let entities = self.entities.clone();
        match story {
            ActiveStory::UserAccess => self
                .user_access_page
                .get_or_insert_with(|| cx.new(|cx| UserAccessPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActiveStory::Pagination => self
                .pagination_page
                .get_or_insert_with(|| cx.new(|cx| PaginationPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActiveStory::Primitives => self
                .primitives_page
                .get_or_insert_with(|| cx.new(|cx| PrimitivesPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActiveStory::Feedback => self
                .feedback_page
                .get_or_insert_with(|| cx.new(|cx| FeedbackPage::new(entities, cx)))
                .clone()
                .into_any_element(),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active = self.entities.gallery.read(cx).active;
        let content = self.get_or_create_page(active, cx);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(ArkemColors::base())
            .text_color(ArkemColors::text_primary())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(
                        div()
                            .id("story-content")
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_y_scroll()
                            .p_6()
                            .child(content),
                    ),
            )
    }
}

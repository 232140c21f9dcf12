//! User Access Page
//!
//! Hosts the user access table and its pager. The page owns nothing: it reads
//! the host state, hands snapshots to the components and routes their change
//! requests through the controller.

use gpui::{div, Context, IntoElement, ParentElement, Render, Styled, Window};
use tracing::warn;

use crate::app::entities::AppEntities;
use crate::components::composite::{Pagination, UserAccessTable};
use crate::components::layout::{HeaderXs, StatusVariant};
use crate::components::primitives::{Button, ButtonSize, Field};
use crate::features::user_access::controller::{selection_json, UserAccessController};
use crate::i18n::t;

/// User access story page
pub struct UserAccessPage {
    entities: AppEntities,
    controller: UserAccessController,
}

impl UserAccessPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = UserAccessController::new(entities.clone());

        cx.observe(&entities.user_access, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
        }
    }
}

impl Render for UserAccessPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let state = self.entities.user_access.read(cx);

        let users = state.page_users();
        let pager = state
            .pager()
            .item_label(t(locale, "item-label-users").to_string());
        let selected = selection_json(state.selection()).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to serialize selection");
            String::new()
        });
        let last_edited = state.last_edited().unwrap_or("-").to_string();
        let has_users = state.has_users();

        let controller = self.controller.clone();
        let table = UserAccessTable::new(users, state.modules().clone())
            .selection(state.selection().clone())
            .sort(state.sort())
            .loading(state.is_loading())
            .error(state.error().map(str::to_string))
            .capability_columns(state.capability_columns())
            .locale(locale)
            .on_selection_change({
                let controller = controller.clone();
                move |selection, _window, cx| controller.change_selection(selection, cx)
            })
            .on_sort_change({
                let controller = controller.clone();
                move |sort, _window, cx| controller.change_sort(sort, cx)
            })
            .on_edit({
                let controller = controller.clone();
                move |user, _window, cx| controller.request_edit(user, cx)
            });

        let pagination = Pagination::new("users-pager", pager).on_page_change({
            let controller = controller.clone();
            move |page, _window, cx| controller.change_page(page, cx)
        });

        let control = |id: &'static str, key: &str, action: fn(&UserAccessController, &mut gpui::App)| {
            let controller = controller.clone();
            Button::new(id, t(locale, key))
                .size(ButtonSize::Small)
                .on_click(move |_event, _window, cx| action(&controller, cx))
        };

        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                HeaderXs::new(t(locale, "story-user-access"))
                    .variant(StatusVariant::Info)
                    .leading_icon(true),
            )
            .child(
                div()
                    .flex()
                    .gap_2()
                    .child(control(
                        "toggle-loading",
                        "action-toggle-loading",
                        UserAccessController::toggle_loading,
                    ))
                    .child(control(
                        "toggle-error",
                        "action-toggle-error",
                        UserAccessController::toggle_error,
                    ))
                    .child(control(
                        "toggle-users",
                        if has_users {
                            "action-clear-users"
                        } else {
                            "action-restore-users"
                        },
                        UserAccessController::toggle_users,
                    )),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(table)
                    .child(pagination),
            )
            .child(
                div()
                    .flex()
                    .gap_8()
                    .child(Field::new(t(locale, "last-edited"), last_edited))
                    .child(Field::new(t(locale, "field-selection"), selected)),
            )
    }
}

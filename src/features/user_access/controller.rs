//! User Access Controller
//!
//! Applies the table's and pager's change requests to the host state.

use gpui::App;
use tracing::{debug, info};

use crate::app::entities::AppEntities;
use crate::domain::{Selection, SortConfig, UserRecord};
use crate::error::Result;

/// User access story controller
#[derive(Clone)]
pub struct UserAccessController {
    entities: AppEntities,
}

impl UserAccessController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    pub fn change_page(&self, page: usize, cx: &mut App) {
        self.entities.user_access.update(cx, |state, cx| {
            if state.set_page(page) {
                debug!(page, "Page changed");
                cx.notify();
            }
        });
    }

    pub fn change_selection(&self, selection: Selection, cx: &mut App) {
        self.entities.user_access.update(cx, |state, cx| {
            debug!(selected = selection.len(), "Selection changed");
            state.set_selection(selection);
            cx.notify();
        });
    }

    pub fn change_sort(&self, sort: SortConfig, cx: &mut App) {
        self.entities.user_access.update(cx, |state, cx| {
            debug!(key = ?sort.key, direction = ?sort.direction, "Sort changed");
            state.set_sort(sort);
            cx.notify();
        });
    }

    pub fn request_edit(&self, user: UserRecord, cx: &mut App) {
        info!(id = %user.id, name = %user.name, "Edit requested");
        self.entities.user_access.update(cx, |state, cx| {
            state.record_edit(&user);
            cx.notify();
        });
    }

    pub fn toggle_loading(&self, cx: &mut App) {
        self.entities.user_access.update(cx, |state, cx| {
            let loading = !state.is_loading();
            state.set_loading(loading);
            cx.notify();
        });
    }

    pub fn toggle_error(&self, cx: &mut App) {
        self.entities.user_access.update(cx, |state, cx| {
            let error = match state.error() {
                Some(_) => None,
                None => Some("503 Service Unavailable".to_string()),
            };
            state.set_error(error);
            cx.notify();
        });
    }

    pub fn toggle_users(&self, cx: &mut App) {
        self.entities.user_access.update(cx, |state, cx| {
            state.toggle_users();
            info!(users = state.total_users(), "User list swapped");
            cx.notify();
        });
    }
}

/// Selected ids as a JSON array, in selection order
pub fn selection_json(selection: &Selection) -> Result<String> {
    Ok(serde_json::to_string(&selection.to_vec())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_serializes_in_order() {
        let selection: Selection = ["b", "a"].into_iter().collect();
        assert_eq!(selection_json(&selection).expect("json"), r#"["b","a"]"#);
        assert_eq!(selection_json(&Selection::new()).expect("json"), "[]");
    }
}

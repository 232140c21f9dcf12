//! User Access State
//!
//! The host's source of truth for the user access story: the full user list,
//! current page, selection and sort. The table and pager only ever see
//! snapshots derived from this state.

use crate::constants::{DEFAULT_CAPABILITY_COLUMNS, DEFAULT_ITEMS_PER_PAGE, DEFAULT_MAX_PAGE_BUTTONS};
use crate::domain::{CapabilityCatalog, DemoDataset, Pager, Selection, SortConfig, UserRecord};
use crate::state::app_config::AppConfig;

/// Host state for the user access table and its pager
#[derive(Debug, Clone)]
pub struct UserAccessState {
    users: Vec<UserRecord>,
    modules: CapabilityCatalog,
    /// Removed users, kept so the empty state can be toggled back
    stashed_users: Vec<UserRecord>,
    selection: Selection,
    sort: SortConfig,
    current_page: usize,
    items_per_page: usize,
    max_page_buttons: usize,
    capability_columns: usize,
    loading: bool,
    error: Option<String>,
    last_edited: Option<String>,
}

impl UserAccessState {
    pub fn new(dataset: DemoDataset) -> Self {
        Self {
            users: dataset.users,
            modules: dataset.modules,
            stashed_users: Vec::new(),
            selection: Selection::new(),
            sort: SortConfig::default(),
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_page_buttons: DEFAULT_MAX_PAGE_BUTTONS,
            capability_columns: DEFAULT_CAPABILITY_COLUMNS,
            loading: false,
            error: None,
            last_edited: None,
        }
    }

    // ==================== Getters ====================

    pub fn modules(&self) -> &CapabilityCatalog {
        &self.modules
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn capability_columns(&self) -> usize {
        self.capability_columns
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_edited(&self) -> Option<&str> {
        self.last_edited.as_deref()
    }

    pub fn total_users(&self) -> usize {
        self.users.len()
    }

    /// Pager props for the current page
    pub fn pager(&self) -> Pager {
        Pager::for_items(self.current_page, self.users.len(), self.items_per_page)
            .max_page_buttons(self.max_page_buttons)
    }

    /// Users on the current page, taken from the fully sorted list
    pub fn page_users(&self) -> Vec<UserRecord> {
        let sorted: Vec<UserRecord> = self.sort.sorted(&self.users).into_iter().cloned().collect();
        self.pager().page_slice(&sorted).to_vec()
    }

    // ==================== Setters ====================

    /// Apply persisted layout settings
    pub fn apply_config(&mut self, config: &AppConfig) {
        self.items_per_page = config.items_per_page.max(1);
        self.max_page_buttons = config.max_page_buttons.max(1);
        self.capability_columns = config.capability_columns;
        self.current_page = self.pager().current_page();
    }

    /// Move to `page`, clamped to the available pages. Selection is scoped to
    /// a page, so it is cleared when the page actually changes.
    pub fn set_page(&mut self, page: usize) -> bool {
        let page = Pager::for_items(page, self.users.len(), self.items_per_page).current_page();
        if page == self.current_page {
            return false;
        }
        self.current_page = page;
        self.selection = Selection::new();
        true
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn set_sort(&mut self, sort: SortConfig) {
        self.sort = sort;
    }

    pub fn record_edit(&mut self, user: &UserRecord) {
        self.last_edited = Some(user.name.clone());
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Swap between the full list and an empty one
    pub fn toggle_users(&mut self) {
        std::mem::swap(&mut self.users, &mut self.stashed_users);
        self.selection = Selection::new();
        self.current_page = 1;
    }

    pub fn has_users(&self) -> bool {
        !self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SortDirection, SortKey, UserRole};

    fn state(count: usize) -> UserAccessState {
        let users = (0..count)
            .map(|i| {
                UserRecord::new(
                    i.to_string(),
                    format!("{:08}", 90_000_000 - i),
                    format!("User {i:03}"),
                    UserRole::User,
                )
            })
            .collect();
        UserAccessState::new(DemoDataset {
            modules: CapabilityCatalog::default(),
            users,
        })
    }

    #[test]
    fn first_page_is_sorted_slice() {
        let state = state(25);
        let page = state.page_users();
        assert_eq!(page.len(), 10);
        assert_eq!(page[0].name, "User 000");
        assert_eq!(state.pager().range_summary(), "Showing 1 to 10 of 25 entries");
    }

    #[test]
    fn sort_applies_before_slicing() {
        let mut state = state(25);
        state.set_sort(SortConfig::new(SortKey::Name, SortDirection::Descending));
        assert_eq!(state.page_users()[0].name, "User 024");
    }

    #[test]
    fn page_changes_clamp_and_clear_selection() {
        let mut state = state(25);
        state.set_selection(Selection::new().toggled("3"));

        assert!(state.set_page(3));
        assert_eq!(state.page_users().len(), 5);
        assert!(state.selection().is_empty());

        assert!(!state.set_page(99));
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn config_changes_page_size() {
        let mut state = state(25);
        state.set_page(3);
        let config = AppConfig {
            items_per_page: 20,
            ..AppConfig::default()
        };
        state.apply_config(&config);
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.page_users().len(), 5);
    }

    #[test]
    fn toggling_users_reaches_empty_state() {
        let mut state = state(3);
        state.toggle_users();
        assert!(!state.has_users());
        assert!(state.page_users().is_empty());
        state.toggle_users();
        assert_eq!(state.total_users(), 3);
    }
}

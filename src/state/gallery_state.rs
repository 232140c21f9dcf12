//! Gallery State
//!
//! Active story plus the small bits of host state the non-table stories need.

use crate::app::navigation::ActiveStory;
use crate::constants::{DEFAULT_ITEMS_PER_PAGE, PAGINATION_STORY_ITEMS};
use crate::domain::{CheckState, Pager};

/// State owned by the gallery shell
#[derive(Debug, Clone)]
pub struct GalleryState {
    pub active: ActiveStory,
    /// Current page of the standalone pagination story
    pub pagination_page: usize,
    pub toast_visible: bool,
    /// Value of the interactive checkbox in the primitives story
    pub demo_check: CheckState,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            active: ActiveStory::default(),
            pagination_page: 1,
            toast_visible: true,
            demo_check: CheckState::Unchecked,
        }
    }
}

impl GalleryState {
    /// Pager for the pagination story
    pub fn story_pager(&self) -> Pager {
        Pager::for_items(self.pagination_page, PAGINATION_STORY_ITEMS, DEFAULT_ITEMS_PER_PAGE)
    }

    /// Select a story; returns whether it changed
    pub fn select(&mut self, story: ActiveStory) -> bool {
        if self.active == story {
            return false;
        }
        self.active = story;
        true
    }

    /// Cycle the demo checkbox: unchecked → checked → indeterminate → unchecked
    pub fn cycle_demo_check(&mut self) {
        self.demo_check = match self.demo_check {
            CheckState::Unchecked => CheckState::Checked,
            CheckState::Checked => CheckState::Indeterminate,
            CheckState::Indeterminate => CheckState::Unchecked,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_pager_spans_generated_items() {
        let state = GalleryState {
            pagination_page: 14,
            ..GalleryState::default()
        };
        let pager = state.story_pager();
        assert_eq!(pager.total_pages(), 14);
        assert_eq!(pager.range_summary(), "Showing 131 to 137 of 137 entries");
    }

    #[test]
    fn select_reports_changes() {
        let mut state = GalleryState::default();
        assert!(!state.select(ActiveStory::UserAccess));
        assert!(state.select(ActiveStory::Pagination));
    }

    #[test]
    fn demo_check_cycles_through_three_states() {
        let mut state = GalleryState::default();
        state.cycle_demo_check();
        assert_eq!(state.demo_check, CheckState::Checked);
        state.cycle_demo_check();
        assert_eq!(state.demo_check, CheckState::Indeterminate);
        state.cycle_demo_check();
        assert_eq!(state.demo_check, CheckState::Unchecked);
    }
}

//! Pager - Page Window Math
//!
//! Pure derivation over pagination props: visible item range, the window of
//! page-number buttons, boundary state, and page-change requests.
//!
//! Out-of-range inputs are clamped rather than rejected: `items_per_page` and
//! `max_page_buttons` are at least 1, and `current_page` is kept inside
//! `1..=max(total_pages, 1)`.

use std::ops::{Range, RangeInclusive};

use crate::constants::{DEFAULT_ITEM_LABEL, DEFAULT_MAX_PAGE_BUTTONS};

/// Number of pages needed for `total_items`; an empty data set still has one page.
pub fn total_pages_for(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page.max(1)).max(1)
}

/// Pagination props and everything derived from them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    total_pages: usize,
    total_items: usize,
    items_per_page: usize,
    max_page_buttons: usize,
    item_label: String,
    show_range_summary: bool,
    show_page_numbers: bool,
}

impl Pager {
    /// Create a pager from explicit page and item counts
    pub fn new(
        current_page: usize,
        total_pages: usize,
        total_items: usize,
        items_per_page: usize,
    ) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current_page: current_page.clamp(1, total_pages),
            total_pages,
            total_items,
            items_per_page: items_per_page.max(1),
            max_page_buttons: DEFAULT_MAX_PAGE_BUTTONS,
            item_label: DEFAULT_ITEM_LABEL.to_string(),
            show_range_summary: true,
            show_page_numbers: true,
        }
    }

    /// Create a pager whose page count is derived from the item count
    pub fn for_items(current_page: usize, total_items: usize, items_per_page: usize) -> Self {
        Self::new(
            current_page,
            total_pages_for(total_items, items_per_page),
            total_items,
            items_per_page,
        )
    }

    /// Set the maximum number of page buttons in the window
    pub fn max_page_buttons(mut self, max: usize) -> Self {
        self.max_page_buttons = max.max(1);
        self
    }

    /// Set the label used in the range summary ("users", "records", ...)
    pub fn item_label(mut self, label: impl Into<String>) -> Self {
        self.item_label = label.into();
        self
    }

    /// Show or hide the range summary
    pub fn show_range_summary(mut self, show: bool) -> Self {
        self.show_range_summary = show;
        self
    }

    /// Show or hide the page-number buttons
    pub fn show_page_numbers(mut self, show: bool) -> Self {
        self.show_page_numbers = show;
        self
    }

    // ==================== Getters ====================

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn label(&self) -> &str {
        &self.item_label
    }

    pub fn shows_range_summary(&self) -> bool {
        self.show_range_summary
    }

    pub fn shows_page_numbers(&self) -> bool {
        self.show_page_numbers
    }

    // ==================== Derivations ====================

    /// Zero-indexed, end-exclusive slice bounds of the current page
    pub fn item_range(&self) -> Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(self.items_per_page)
            .min(self.total_items);
        let end = start.saturating_add(self.items_per_page).min(self.total_items);
        start..end
    }

    /// "Showing 1 to 10 of 100 entries"
    pub fn range_summary(&self) -> String {
        let range = self.item_range();
        let first = if self.total_items == 0 { 0 } else { range.start.saturating_add(1) };
        format!(
            "Showing {} to {} of {} {}",
            first, range.end, self.total_items, self.item_label
        )
    }

    /// Contiguous window of page numbers to render, always containing the current page
    pub fn page_window(&self) -> RangeInclusive<usize> {
        let max = self.max_page_buttons;
        if self.total_pages <= max {
            return 1..=self.total_pages;
        }

        let half = max / 2;
        let mut start = self.current_page.saturating_sub(half).max(1);
        let end = start.saturating_add(max - 1).min(self.total_pages);

        if end - start < max - 1 {
            start = end.saturating_sub(max - 1).max(1);
        }

        start..=end
    }

    /// Page numbers of the window as a vector
    pub fn page_numbers(&self) -> Vec<usize> {
        self.page_window().collect()
    }

    /// Whether `page` is the current page
    pub fn is_current(&self, page: usize) -> bool {
        page == self.current_page
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page == self.total_pages
    }

    /// Page to request when a page button is clicked, if any
    pub fn request_page(&self, page: usize) -> Option<usize> {
        (1..=self.total_pages)
            .contains(&page)
            .then_some(page)
            .filter(|&page| page != self.current_page)
    }

    /// Page to request when "previous" is clicked, if enabled
    pub fn request_previous(&self) -> Option<usize> {
        (!self.is_first_page()).then(|| self.current_page - 1)
    }

    /// Page to request when "next" is clicked, if enabled
    pub fn request_next(&self) -> Option<usize> {
        (!self.is_last_page()).then(|| self.current_page + 1)
    }

    /// Slice `items` down to the current page
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.item_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_first_and_last_page() {
        let pager = Pager::new(1, 10, 100, 10);
        assert_eq!(pager.range_summary(), "Showing 1 to 10 of 100 entries");

        let pager = Pager::new(10, 10, 100, 10);
        assert_eq!(pager.range_summary(), "Showing 91 to 100 of 100 entries");
    }

    #[test]
    fn summary_uses_label_verbatim() {
        let pager = Pager::for_items(3, 25, 10).item_label("users");
        assert_eq!(pager.range_summary(), "Showing 21 to 25 of 25 users");
    }

    #[test]
    fn summary_for_empty_data() {
        let pager = Pager::for_items(1, 0, 10);
        assert_eq!(pager.total_pages(), 1);
        assert_eq!(pager.range_summary(), "Showing 0 to 0 of 0 entries");
    }

    #[test]
    fn window_near_start_is_shifted_to_full_width() {
        let pager = Pager::new(5, 50, 500, 10).max_page_buttons(10);
        assert_eq!(pager.page_window(), 1..=10);
    }

    #[test]
    fn window_centers_on_current_page() {
        let pager = Pager::new(25, 50, 500, 10).max_page_buttons(10);
        assert_eq!(pager.page_window(), 20..=29);
    }

    #[test]
    fn window_near_end_is_shifted_left() {
        let pager = Pager::new(49, 50, 500, 10).max_page_buttons(10);
        assert_eq!(pager.page_window(), 41..=50);
    }

    #[test]
    fn window_shows_all_pages_when_few() {
        let pager = Pager::new(2, 4, 40, 10).max_page_buttons(10);
        assert_eq!(pager.page_numbers(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn window_properties_hold_for_all_inputs() {
        for total_pages in 1..=30 {
            for max in 1..=12 {
                for current in 1..=total_pages {
                    let pager = Pager::new(current, total_pages, total_pages * 5, 5)
                        .max_page_buttons(max);
                    let pages = pager.page_numbers();

                    assert_eq!(pages.len(), total_pages.min(max));
                    assert!(pages.contains(&current));
                    assert!(pages.windows(2).all(|w| w[1] == w[0] + 1));
                    assert!(pages.iter().all(|p| (1..=total_pages).contains(p)));
                }
            }
        }
    }

    #[test]
    fn boundary_controls() {
        let first = Pager::new(1, 5, 50, 10);
        assert!(first.is_first_page());
        assert_eq!(first.request_previous(), None);
        assert_eq!(first.request_next(), Some(2));

        let last = Pager::new(5, 5, 50, 10);
        assert!(last.is_last_page());
        assert_eq!(last.request_next(), None);
        assert_eq!(last.request_previous(), Some(4));

        let single = Pager::new(1, 1, 3, 10);
        assert!(single.is_first_page() && single.is_last_page());
    }

    #[test]
    fn page_requests_outside_range_are_ignored() {
        let pager = Pager::new(3, 5, 50, 10);
        assert_eq!(pager.request_page(0), None);
        assert_eq!(pager.request_page(6), None);
        assert_eq!(pager.request_page(3), None);
        assert_eq!(pager.request_page(5), Some(5));
    }

    #[test]
    fn degenerate_inputs_are_clamped() {
        let pager = Pager::new(0, 5, 50, 0).max_page_buttons(0);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.items_per_page(), 1);
        assert_eq!(pager.page_numbers(), vec![1]);

        let pager = Pager::new(99, 5, 50, 10);
        assert_eq!(pager.current_page(), 5);
    }

    #[test]
    fn extreme_counts_saturate() {
        let pager = Pager::for_items(usize::MAX, usize::MAX, 1);
        assert_eq!(pager.page_window(), usize::MAX - 9..=usize::MAX);
        assert_eq!(pager.item_range(), usize::MAX - 1..usize::MAX);
        assert!(pager.range_summary().starts_with(&format!("Showing {} to", usize::MAX)));

        let pager = Pager::new(usize::MAX, usize::MAX, 100, usize::MAX).max_page_buttons(usize::MAX);
        assert_eq!(pager.item_range(), 100..100);
        assert_eq!(pager.page_window(), 1..=usize::MAX);

        let pager = Pager::new(usize::MAX - 1, usize::MAX, usize::MAX, 1).max_page_buttons(4);
        assert_eq!(pager.page_window(), usize::MAX - 3..=usize::MAX);
        assert_eq!(pager.request_next(), Some(usize::MAX));
    }

    #[test]
    fn page_slice_matches_range() {
        let items: Vec<usize> = (0..23).collect();
        let pager = Pager::for_items(3, items.len(), 10);
        assert_eq!(pager.page_slice(&items), &[20, 21, 22]);
    }
}

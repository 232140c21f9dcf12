//! Selection - Row Selection Set and Header Check State
//!
//! The selection is an insertion-ordered set of row ids. Aggregate flags are
//! recomputed from the selection and the visible rows on every call; nothing
//! here caches derived state.

use hashlink::LinkedHashSet;

/// Tri-state value of a checkbox
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckState {
    /// Plain two-state value
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }

    pub fn is_checked(self) -> bool {
        self == CheckState::Checked
    }
}

/// Selected row ids, in the order they were selected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: LinkedHashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    /// Selection with `id`'s membership flipped. Membership in the visible
    /// rows is not checked.
    pub fn toggled(&self, id: &str) -> Self {
        let mut next = self.clone();
        if !next.ids.remove(id) {
            next.ids.insert(id.to_string());
        }
        next
    }

    /// Selection after the header checkbox is clicked: clears everything when
    /// every visible row is selected, otherwise selects exactly the visible rows.
    pub fn toggled_all<'a>(&self, visible_ids: impl IntoIterator<Item = &'a str> + Clone) -> Self {
        let visible = visible_ids.clone().into_iter().count();
        if self.summary(visible).all_selected {
            Self::new()
        } else {
            visible_ids.into_iter().collect()
        }
    }

    /// Aggregate flags against `visible_rows` rows
    pub fn summary(&self, visible_rows: usize) -> SelectionSummary {
        SelectionSummary::new(self.len(), visible_rows)
    }
}

impl<'a> FromIterator<&'a str> for Selection {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(str::to_string).collect(),
        }
    }
}

impl FromIterator<String> for Selection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Derived select-all flags; never both true
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSummary {
    pub selected: usize,
    pub all_selected: bool,
    pub some_selected: bool,
}

impl SelectionSummary {
    pub fn new(selected: usize, visible_rows: usize) -> Self {
        let all_selected = selected > 0 && selected == visible_rows;
        Self {
            selected,
            all_selected,
            some_selected: selected > 0 && !all_selected,
        }
    }

    /// State of the header checkbox
    pub fn check_state(self) -> CheckState {
        if self.all_selected {
            CheckState::Checked
        } else if self.some_selected {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: [&str; 3] = ["a", "b", "c"];

    #[test]
    fn toggle_row_flips_membership() {
        let sel = Selection::new().toggled("a").toggled("b");
        assert_eq!(sel.to_vec(), vec!["a", "b"]);
        let sel = sel.toggled("a");
        assert_eq!(sel.to_vec(), vec!["b"]);
    }

    #[test]
    fn toggle_row_accepts_unknown_ids() {
        let sel = Selection::new().toggled("not-on-page");
        assert!(sel.contains("not-on-page"));
    }

    #[test]
    fn toggle_all_selects_page_then_clears() {
        let sel = Selection::new().toggled_all(PAGE);
        assert_eq!(sel.to_vec(), vec!["a", "b", "c"]);
        assert!(sel.summary(PAGE.len()).all_selected);

        let sel = sel.toggled_all(PAGE);
        assert!(sel.is_empty());
    }

    #[test]
    fn toggle_all_twice_restores_selection() {
        for original in [
            Selection::new(),
            PAGE.into_iter().collect::<Selection>(),
        ] {
            let twice = original.toggled_all(PAGE).toggled_all(PAGE);
            assert_eq!(twice, original);
        }
    }

    #[test]
    fn partial_selection_is_completed_by_toggle_all() {
        let sel = Selection::new().toggled("b").toggled_all(PAGE);
        assert_eq!(sel.len(), 3);
    }

    #[test]
    fn deselecting_one_after_select_all_is_indeterminate() {
        let sel = Selection::new().toggled_all(PAGE).toggled("b");
        let summary = sel.summary(PAGE.len());
        assert!(summary.some_selected);
        assert!(!summary.all_selected);
        assert_eq!(summary.check_state(), CheckState::Indeterminate);
    }

    #[test]
    fn flags_are_exclusive() {
        for visible in 0..6 {
            for selected in 0..=visible {
                let summary = SelectionSummary::new(selected, visible);
                assert!(!(summary.all_selected && summary.some_selected));
            }
        }
    }

    #[test]
    fn empty_page_is_never_all_selected() {
        let summary = Selection::new().summary(0);
        assert_eq!(summary.check_state(), CheckState::Unchecked);
    }
}

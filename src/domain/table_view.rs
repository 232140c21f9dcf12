//! Table View - Per-Render Derivation for the User Access Table
//!
//! Everything the table shows is computed here from the host's props on each
//! render: which placeholder (if any) to show, the sorted rows, per-row
//! selection, and the header checkbox state.

use super::selection::{CheckState, Selection, SelectionSummary};
use super::sort::SortConfig;
use super::user::UserRecord;

/// What the table body displays, checked in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableDisplay<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Populated,
}

impl<'a> TableDisplay<'a> {
    /// Loading beats error, error beats empty. An empty message is no error.
    pub fn classify(is_loading: bool, error: Option<&'a str>, row_count: usize) -> Self {
        if is_loading {
            TableDisplay::Loading
        } else if let Some(error) = error.filter(|error| !error.is_empty()) {
            TableDisplay::Error(error)
        } else if row_count == 0 {
            TableDisplay::Empty
        } else {
            TableDisplay::Populated
        }
    }
}

/// A row as rendered: the user plus whether it is selected
#[derive(Debug, Clone, Copy)]
pub struct ViewRow<'a> {
    pub index: usize,
    pub user: &'a UserRecord,
    pub selected: bool,
}

/// Part of a row a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    /// Plain data cell
    Cell,
    /// Selection checkbox column
    Checkbox,
    /// Row actions column
    Action,
}

impl RowTarget {
    /// Controls keep their clicks; only plain cells toggle the row
    pub fn toggles_row(self) -> bool {
        matches!(self, RowTarget::Cell)
    }
}

impl ViewRow<'_> {
    /// Selection after a click on `target`, `None` when the row must not toggle
    pub fn clicked(&self, target: RowTarget, selection: &Selection) -> Option<Selection> {
        target
            .toggles_row()
            .then(|| selection.toggled(&self.user.id))
    }
}

/// Sorted rows and aggregate selection for one render
#[derive(Debug, Clone)]
pub struct UserTableView<'a> {
    pub rows: Vec<ViewRow<'a>>,
    pub summary: SelectionSummary,
    pub sort: SortConfig,
}

impl<'a> UserTableView<'a> {
    pub fn derive(users: &'a [UserRecord], selection: &Selection, sort: SortConfig) -> Self {
        let rows = sort
            .sorted(users)
            .into_iter()
            .enumerate()
            .map(|(index, user)| ViewRow {
                index,
                user,
                selected: selection.contains(&user.id),
            })
            .collect::<Vec<_>>();

        Self {
            summary: selection.summary(rows.len()),
            rows,
            sort,
        }
    }

    pub fn header_state(&self) -> CheckState {
        self.summary.check_state()
    }

    /// Ids of the rendered rows, in display order
    pub fn visible_ids(&self) -> impl Iterator<Item = &'a str> + Clone + '_ {
        self.rows.iter().map(|row| row.user.id.as_str())
    }

    /// "3 users selected", `None` when nothing is selected
    pub fn batch_label(&self) -> Option<String> {
        match self.summary.selected {
            0 => None,
            1 => Some("1 user selected".to_string()),
            n => Some(format!("{n} users selected")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sort::{SortDirection, SortKey};
    use crate::domain::user::UserRole;

    fn users() -> Vec<UserRecord> {
        vec![
            UserRecord::new("1", "30000000", "Carol", UserRole::User),
            UserRecord::new("2", "10000000", "Alice", UserRole::Admin),
            UserRecord::new("3", "20000000", "Bob", UserRole::User),
        ]
    }

    #[test]
    fn loading_takes_precedence() {
        assert_eq!(TableDisplay::classify(true, Some("x"), 0), TableDisplay::Loading);
        assert_eq!(TableDisplay::classify(true, None, 4), TableDisplay::Loading);
    }

    #[test]
    fn error_beats_empty() {
        assert_eq!(TableDisplay::classify(false, Some("x"), 0), TableDisplay::Error("x"));
        assert_eq!(TableDisplay::classify(false, None, 0), TableDisplay::Empty);
        assert_eq!(TableDisplay::classify(false, None, 1), TableDisplay::Populated);
    }

    #[test]
    fn empty_error_message_is_no_error() {
        assert_eq!(TableDisplay::classify(false, Some(""), 0), TableDisplay::Empty);
        assert_eq!(TableDisplay::classify(false, Some(""), 2), TableDisplay::Populated);
        assert_eq!(TableDisplay::classify(false, Some(" "), 2), TableDisplay::Error(" "));
    }

    #[test]
    fn only_plain_cells_toggle_the_row() {
        let users = users();
        let selection = Selection::new().toggled("1");
        let view = UserTableView::derive(&users, &selection, SortConfig::default());
        let row = view.rows[0];

        assert!(RowTarget::Cell.toggles_row());
        assert!(!RowTarget::Checkbox.toggles_row());
        assert!(!RowTarget::Action.toggles_row());

        let toggled = row.clicked(RowTarget::Cell, &selection);
        assert_eq!(toggled, Some(selection.toggled(&row.user.id)));
        assert_eq!(row.clicked(RowTarget::Checkbox, &selection), None);
        assert_eq!(row.clicked(RowTarget::Action, &selection), None);
    }

    #[test]
    fn derive_sorts_and_marks_selection() {
        let users = users();
        let selection = Selection::new().toggled("3");
        let sort = SortConfig::new(SortKey::UserId, SortDirection::Descending);
        let view = UserTableView::derive(&users, &selection, sort);

        let ids: Vec<&str> = view.visible_ids().collect();
        assert_eq!(ids, vec!["1", "3", "2"]);
        assert!(view.rows[1].selected);
        assert!(!view.rows[0].selected);
        assert_eq!(view.header_state(), CheckState::Indeterminate);
    }

    #[test]
    fn select_all_then_deselect_one() {
        let users = users();
        let sort = SortConfig::default();
        let view = UserTableView::derive(&users, &Selection::new(), sort);
        let all = Selection::new().toggled_all(view.visible_ids());

        let view = UserTableView::derive(&users, &all, sort);
        assert_eq!(view.header_state(), CheckState::Checked);

        let partial = all.toggled("2");
        let view = UserTableView::derive(&users, &partial, sort);
        assert!(view.summary.some_selected);
        assert!(!view.summary.all_selected);
    }

    #[test]
    fn batch_label_pluralizes() {
        let users = users();
        let sort = SortConfig::default();
        assert_eq!(UserTableView::derive(&users, &Selection::new(), sort).batch_label(), None);

        let one = Selection::new().toggled("1");
        assert_eq!(
            UserTableView::derive(&users, &one, sort).batch_label().as_deref(),
            Some("1 user selected")
        );

        let two = one.toggled("2");
        assert_eq!(
            UserTableView::derive(&users, &two, sort).batch_label().as_deref(),
            Some("2 users selected")
        );
    }
}

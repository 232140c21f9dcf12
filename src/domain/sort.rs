//! Sorting - Sort Keys, Directions, and Row Ordering

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::user::UserRecord;

/// Sortable columns of the user access table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Name,
    UserId,
    Role,
}

impl SortKey {
    /// All sortable keys in header order
    pub fn all() -> &'static [SortKey] {
        &[SortKey::Name, SortKey::UserId, SortKey::Role]
    }

    /// Translation key of the column header
    pub fn title_key(self) -> &'static str {
        match self {
            SortKey::Name => "col-name",
            SortKey::UserId => "col-user-id",
            SortKey::Role => "col-role",
        }
    }

    /// Textual value of `user` for this key
    fn value(self, user: &UserRecord) -> &str {
        match self {
            SortKey::Name => &user.name,
            SortKey::UserId => &user.user_id,
            SortKey::Role => user.role.as_str(),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }

    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply this direction to an ascending ordering
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Sort config after the header for `key` is clicked.
    ///
    /// Clicking the active column flips its direction; any other column
    /// becomes active in ascending order.
    pub fn change(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.toggled())
        } else {
            Self::new(key, SortDirection::Ascending)
        }
    }

    /// Direction shown for `key`'s header, `None` when the column is inactive
    pub fn direction_for(self, key: SortKey) -> Option<SortDirection> {
        (self.key == key).then_some(self.direction)
    }

    /// Compare two users under this config
    pub fn compare(self, a: &UserRecord, b: &UserRecord) -> Ordering {
        self.direction
            .apply(locale_compare(self.key.value(a), self.key.value(b)))
    }

    /// A sorted copy of `users`; ties keep their input order
    pub fn sorted<'a>(self, users: &'a [UserRecord]) -> Vec<&'a UserRecord> {
        let mut view: Vec<&UserRecord> = users.iter().collect();
        view.sort_by(|a, b| self.compare(a, b));
        view
    }
}

/// Textual comparison in the order people expect from a name list: letters
/// compare without diacritics and case first, so "Émilie" sorts with the E's.
/// Ties fall back to accents (plain before accented), then case (lower first).
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| accent_key(a).cmp(accent_key(b)))
        .then_with(|| b.cmp(a))
}

fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accent_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserRole;

    fn user(id: &str, name: &str, role: UserRole) -> UserRecord {
        UserRecord::new(id, format!("1000000{id}"), name, role)
    }

    #[test]
    fn same_key_flips_direction() {
        let config = SortConfig::new(SortKey::Name, SortDirection::Ascending);
        assert_eq!(
            config.change(SortKey::Name),
            SortConfig::new(SortKey::Name, SortDirection::Descending)
        );
        assert_eq!(
            config.change(SortKey::Name).change(SortKey::Name),
            config
        );
    }

    #[test]
    fn new_key_starts_ascending() {
        let config = SortConfig::new(SortKey::Role, SortDirection::Ascending);
        assert_eq!(
            config.change(SortKey::Name),
            SortConfig::new(SortKey::Name, SortDirection::Ascending)
        );

        let config = SortConfig::new(SortKey::Role, SortDirection::Descending);
        assert_eq!(config.change(SortKey::UserId).direction, SortDirection::Ascending);
    }

    #[test]
    fn locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("alice", "Bob"), Ordering::Less);
        assert_eq!(locale_compare("Zoe", "adam"), Ordering::Greater);
        assert_eq!(locale_compare("alice", "Alice"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        assert_eq!(locale_compare("Émilie", "Zoe"), Ordering::Less);
        assert_eq!(locale_compare("Eric", "Éric"), Ordering::Less);
        assert_eq!(locale_compare("émile", "Emily"), Ordering::Less);

        let mut names = vec!["Zoe Park", "Émilie Laurent", "Aaron Li", "Éric Dubois", "Olivia"];
        names.sort_by(|a, b| locale_compare(a, b));
        assert_eq!(
            names,
            vec!["Aaron Li", "Émilie Laurent", "Éric Dubois", "Olivia", "Zoe Park"]
        );
    }

    #[test]
    fn sorts_by_name_both_directions() {
        let users = vec![
            user("1", "Sarah Chen", UserRole::Admin),
            user("2", "marcus Johnson", UserRole::User),
            user("3", "Emily Rodriguez", UserRole::User),
        ];

        let asc = SortConfig::new(SortKey::Name, SortDirection::Ascending).sorted(&users);
        let names: Vec<&str> = asc.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Emily Rodriguez", "marcus Johnson", "Sarah Chen"]);

        let desc = SortConfig::new(SortKey::Name, SortDirection::Descending).sorted(&users);
        let names: Vec<&str> = desc.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Sarah Chen", "marcus Johnson", "Emily Rodriguez"]);
    }

    #[test]
    fn role_sort_is_stable() {
        let users = vec![
            user("1", "B", UserRole::User),
            user("2", "A", UserRole::Admin),
            user("3", "C", UserRole::User),
        ];
        let sorted = SortConfig::new(SortKey::Role, SortDirection::Ascending).sorted(&users);
        let ids: Vec<&str> = sorted.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }

    #[test]
    fn header_direction_only_for_active_key() {
        let config = SortConfig::new(SortKey::UserId, SortDirection::Descending);
        assert_eq!(config.direction_for(SortKey::UserId), Some(SortDirection::Descending));
        assert_eq!(config.direction_for(SortKey::Name), None);
    }
}

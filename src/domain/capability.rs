//! Capability Catalog - Module Access Columns
//!
//! The catalog is the ordered list of modules a user may be granted. The
//! table shows a fixed number of module columns: a longer catalog is
//! truncated, a shorter one is padded with unconfigured columns.

use serde::{Deserialize, Serialize};

use super::user::UserRecord;
use crate::assets::IconName;

/// One module in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    pub id: String,
    pub name: String,
    pub icon: IconName,
}

impl Capability {
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: IconName) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon,
        }
    }
}

/// A module column of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityColumn<'a> {
    Configured(&'a Capability),
    /// Padding column when the catalog is shorter than the column count
    Unconfigured,
}

/// Access indicator for one user and one module column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessCell {
    Allowed,
    Denied,
    NotConfigured,
}

impl AccessCell {
    pub fn is_allowed(self) -> bool {
        self == AccessCell::Allowed
    }
}

/// Ordered list of capabilities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityCatalog {
    capabilities: Vec<Capability>,
}

impl CapabilityCatalog {
    pub fn new(capabilities: Vec<Capability>) -> Self {
        Self { capabilities }
    }

    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.capabilities.iter()
    }

    /// Exactly `count` columns: catalog entries first, then padding
    pub fn columns(&self, count: usize) -> Vec<CapabilityColumn<'_>> {
        let configured = self
            .capabilities
            .iter()
            .take(count)
            .map(CapabilityColumn::Configured);
        let padding = std::iter::repeat_n(
            CapabilityColumn::Unconfigured,
            count.saturating_sub(self.capabilities.len()),
        );
        configured.chain(padding).collect()
    }

    /// Access cells of `user` for each of the `count` columns
    pub fn access_cells(&self, user: &UserRecord, count: usize) -> Vec<AccessCell> {
        self.columns(count)
            .into_iter()
            .map(|column| match column {
                CapabilityColumn::Configured(capability) if user.has_module(&capability.id) => {
                    AccessCell::Allowed
                }
                CapabilityColumn::Configured(_) => AccessCell::Denied,
                CapabilityColumn::Unconfigured => AccessCell::NotConfigured,
            })
            .collect()
    }
}

impl FromIterator<Capability> for CapabilityCatalog {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserRole;

    fn catalog(n: usize) -> CapabilityCatalog {
        (0..n)
            .map(|i| Capability::new(format!("m{i}"), format!("Module {i}"), IconName::Globe))
            .collect()
    }

    #[test]
    fn short_catalog_is_padded() {
        let catalog = catalog(2);
        let columns = catalog.columns(7);
        assert_eq!(columns.len(), 7);
        assert!(matches!(columns[1], CapabilityColumn::Configured(c) if c.id == "m1"));
        assert!(columns[2..].iter().all(|c| *c == CapabilityColumn::Unconfigured));
    }

    #[test]
    fn long_catalog_is_truncated() {
        let catalog = catalog(9);
        let columns = catalog.columns(7);
        assert_eq!(columns.len(), 7);
        assert!(matches!(columns[6], CapabilityColumn::Configured(c) if c.id == "m6"));
    }

    #[test]
    fn column_count_is_configurable() {
        assert_eq!(catalog(3).columns(4).len(), 4);
        assert!(catalog(3).columns(0).is_empty());
    }

    #[test]
    fn access_follows_module_membership() {
        let user = UserRecord::new("1", "10000001", "Ann Lee", UserRole::User)
            .with_modules(["m0", "m2"]);
        let cells = catalog(3).access_cells(&user, 5);
        assert_eq!(
            cells,
            vec![
                AccessCell::Allowed,
                AccessCell::Denied,
                AccessCell::Allowed,
                AccessCell::NotConfigured,
                AccessCell::NotConfigured,
            ]
        );
    }
}

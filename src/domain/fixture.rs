//! Demo Data Set
//!
//! Users and the module catalog shown by the gallery stories, loaded from
//! TOML. The built-in set is embedded at compile time.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::capability::CapabilityCatalog;
use super::user::UserRecord;
use crate::error::{Error, Result};

const BUILTIN_DATASET: &str = include_str!("../../fixtures/user_access.toml");

/// Module catalog plus the users to display
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoDataset {
    #[serde(default)]
    pub modules: CapabilityCatalog,
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

impl DemoDataset {
    /// The data set bundled with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_DATASET)
    }

    /// Parse and validate a data set
    pub fn from_toml(source: &str) -> Result<Self> {
        let dataset: Self = toml::from_str(source)?;
        dataset.validate()?;
        debug!(
            users = dataset.users.len(),
            modules = dataset.modules.len(),
            "Loaded demo data set"
        );
        Ok(dataset)
    }

    /// Row ids must be unique; module references outside the catalog are
    /// tolerated and only logged.
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for user in &self.users {
            if !seen.insert(user.id.as_str()) {
                return Err(Error::Fixture {
                    message: format!("duplicate user id {:?}", user.id),
                });
            }
        }

        let known: HashSet<&str> = self.modules.iter().map(|m| m.id.as_str()).collect();
        for user in &self.users {
            for module in user.modules.iter().filter(|m| !known.contains(m.as_str())) {
                warn!(user = %user.id, module = %module, "User references unknown module");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::IconName;
    use crate::domain::user::UserRole;

    #[test]
    fn builtin_dataset_loads() {
        let dataset = DemoDataset::builtin().expect("builtin data set is valid");
        assert_eq!(dataset.modules.len(), 7);
        assert!(dataset.users.len() > 10);

        let first = &dataset.users[0];
        assert_eq!(first.name, "Sarah Chen");
        assert_eq!(first.role, UserRole::Admin);
        assert_eq!(first.modules.len(), 7);

        let icons: Vec<IconName> = dataset.modules.iter().map(|m| m.icon).collect();
        assert_eq!(icons[0], IconName::MonitorPlay);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let source = r#"
            [[users]]
            id = "1"
            userId = "1"
            name = "A"

            [[users]]
            id = "1"
            userId = "2"
            name = "B"
        "#;
        assert!(matches!(
            DemoDataset::from_toml(source),
            Err(Error::Fixture { .. })
        ));
    }

    #[test]
    fn unknown_module_icon_is_rejected() {
        let source = r#"
            [[modules]]
            id = "m"
            name = "M"
            icon = "rocket"
        "#;
        assert!(matches!(
            DemoDataset::from_toml(source),
            Err(Error::TomlDe { .. })
        ));
    }
}

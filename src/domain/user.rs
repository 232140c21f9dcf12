//! User Record - Row Entity of the User Access Table

use serde::{Deserialize, Serialize};

/// Role of a user; rendered as a badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }
}

/// One user row. Owned by the host; components only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Stable row identifier used for selection
    pub id: String,
    /// Displayed account number
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub role: UserRole,
    /// Capability ids this user can access
    #[serde(default)]
    pub modules: Vec<String>,
    #[serde(default)]
    pub record_limit: u32,
    #[serde(default)]
    pub time_window_days: u32,
    #[serde(default)]
    pub mask_shodan: bool,
    #[serde(default)]
    pub hash_identifiers: bool,
    #[serde(default)]
    pub ai_assistant: bool,
}

impl UserRecord {
    /// Create a user with no module access and default data limits
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        name: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            name: name.into(),
            role,
            modules: Vec::new(),
            record_limit: 0,
            time_window_days: 0,
            mask_shodan: false,
            hash_identifiers: false,
            ai_assistant: false,
        }
    }

    /// Grant access to the given capability ids
    pub fn with_modules<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modules = modules.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this user can access capability `id`
    pub fn has_module(&self, id: &str) -> bool {
        self.modules.iter().any(|m| m == id)
    }

    /// Avatar initials: first letter of up to two words, uppercased
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        let user = UserRecord::new("1", "10000001", "sarah jane chen", UserRole::Admin);
        assert_eq!(user.initials(), "SJ");

        let user = UserRecord::new("2", "10000002", "Madonna", UserRole::User);
        assert_eq!(user.initials(), "M");

        let user = UserRecord::new("3", "10000003", "   ", UserRole::User);
        assert_eq!(user.initials(), "");
    }

    #[test]
    fn module_membership() {
        let user = UserRecord::new("1", "10000001", "Ann", UserRole::User)
            .with_modules(["monitor", "globe"]);
        assert!(user.has_module("globe"));
        assert!(!user.has_module("download"));
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let user: UserRecord = serde_json::from_str(
            r#"{"id":"7","userId":"12345678","name":"Kai Lee","role":"admin","recordLimit":50}"#,
        )
        .expect("valid user json");
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.record_limit, 50);
        assert!(user.modules.is_empty());
        assert!(!user.ai_assistant);
    }
}

//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Short language tag stored in the config file
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::ZhCN => "zh",
        }
    }

    /// Parse a language tag such as "zh" or "en-US"; unknown tags fall back to English
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag.split(['-', '_']).next().unwrap_or_default();
        if lang.eq_ignore_ascii_case("zh") {
            Locale::ZhCN
        } else {
            Locale::EnUS
        }
    }

    /// The other locale
    pub fn toggled(&self) -> Self {
        match self {
            Locale::EnUS => Locale::ZhCN,
            Locale::ZhCN => Locale::EnUS,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Arkem Storybook", "Arkem 组件库"));

    // Stories
    map.insert("story-user-access", ("User Access Table", "用户权限表"));
    map.insert("story-pagination", ("Pagination", "分页"));
    map.insert("story-primitives", ("Primitives", "基础组件"));
    map.insert("story-feedback", ("Feedback", "反馈"));

    // Table column groups
    map.insert("group-users", ("users", "用户"));
    map.insert("group-module-access", ("MODULE ACCESS", "模块权限"));
    map.insert("group-data-access", ("DATA ACCESS", "数据权限"));
    map.insert("col-actions", ("Actions", "操作"));

    // Table columns
    map.insert("col-name", ("Name", "姓名"));
    map.insert("col-user-id", ("User ID", "用户编号"));
    map.insert("col-role", ("Role", "角色"));
    map.insert("col-record-limit", ("Record Limit", "记录上限"));
    map.insert("col-time-window", ("Time Window (Days)", "时间窗口 (天)"));
    map.insert("col-mask-shodan", ("Mask Shodan", "屏蔽 Shodan"));
    map.insert("col-hash-identifiers", ("Hash Identifiers", "哈希标识"));
    map.insert("col-ai-assistant", ("AI Assistant", "AI 助手"));

    // Table states
    map.insert("table-loading", ("Loading users…", "正在加载用户…"));
    map.insert("table-error", ("Failed to load users. Try again.", "加载用户失败，请重试。"));
    map.insert("table-empty", ("No users found.", "未找到用户。"));

    // Story controls
    map.insert("action-toggle-loading", ("Toggle loading", "切换加载"));
    map.insert("action-toggle-error", ("Toggle error", "切换错误"));
    map.insert("action-clear-users", ("Clear users", "清空用户"));
    map.insert("action-restore-users", ("Restore users", "恢复用户"));
    map.insert("action-show-toast", ("Show toast", "显示通知"));
    map.insert("last-edited", ("Last edit request", "最近编辑请求"));
    map.insert("field-selection", ("Selected ids", "已选编号"));
    map.insert("item-label-users", ("users", "位用户"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_keys() {
        assert_eq!(t(Locale::EnUS, "table-empty").to_string(), "No users found.");
        assert_eq!(t(Locale::ZhCN, "col-role").to_string(), "角色");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::EnUS, "no-such-key").to_string(), "no-such-key");
    }

    #[test]
    fn parses_language_tags() {
        assert_eq!(Locale::from_tag("zh-CN"), Locale::ZhCN);
        assert_eq!(Locale::from_tag("en_US"), Locale::EnUS);
        assert_eq!(Locale::from_tag("fr"), Locale::EnUS);
        assert_eq!(Locale::from_tag(""), Locale::EnUS);
    }
}

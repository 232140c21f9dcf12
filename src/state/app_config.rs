//! Application Configuration
//!
//! Persisted gallery settings: pagination defaults, table layout, locale and
//! window size. Stored as TOML in the platform config directory.

use std::path::{Path, PathBuf};

use locale_config::Locale as SystemLocale;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::{
    DEFAULT_CAPABILITY_COLUMNS, DEFAULT_ITEMS_PER_PAGE, DEFAULT_ITEM_LABEL,
    DEFAULT_MAX_PAGE_BUTTONS, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH,
};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::i18n::Locale;

const CONFIG_FILE: &str = "arkem-ui.toml";

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(CONFIG_FILE);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub items_per_page: usize,
    pub max_page_buttons: usize,
    pub capability_columns: usize,
    pub item_label: String,
    /// Language tag; detected from the system when unset
    pub locale: Option<String>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_page_buttons: DEFAULT_MAX_PAGE_BUTTONS,
            capability_columns: DEFAULT_CAPABILITY_COLUMNS,
            item_label: DEFAULT_ITEM_LABEL.to_string(),
            locale: None,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl AppConfig {
    /// Load from the platform config file, creating it when missing
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let mut config = Self::load_from(&path)?;

        if config.locale.as_ref().is_none_or(|l| l.is_empty()) {
            config.locale = Some(Locale::from_tag(&SystemLocale::current().to_string()).tag().to_string());
        }

        Ok(config)
    }

    /// Load from `path`; an empty file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let value = std::fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;

        Ok(config.sanitized())
    }

    /// Save to the platform config file
    pub fn save(&self) -> Result<()> {
        let path = get_config_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string_pretty(self)?;
        std::fs::write(path, value)?;
        info!(path = ?path, "Config saved");
        Ok(())
    }

    /// Zero sizes are clamped to 1 and the window to its minimum
    fn sanitized(mut self) -> Self {
        self.items_per_page = self.items_per_page.max(1);
        self.max_page_buttons = self.max_page_buttons.max(1);
        self.window_width = self.window_width.max(MIN_WINDOW_WIDTH);
        self.window_height = self.window_height.max(MIN_WINDOW_HEIGHT);
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale.as_deref().map(Locale::from_tag).unwrap_or_default()
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = Some(locale.tag().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("arkem-ui-{}-{name}.toml", std::process::id()))
    }

    #[test]
    fn empty_file_gives_defaults() {
        let path = temp_path("empty");
        std::fs::write(&path, "  \n").expect("write temp file");
        let config = AppConfig::load_from(&path).expect("load");
        assert_eq!(config, AppConfig::default());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn save_then_load_preserves_values() {
        let path = temp_path("roundtrip");
        let mut config = AppConfig {
            items_per_page: 25,
            item_label: "users".to_string(),
            ..AppConfig::default()
        };
        config.set_locale(Locale::ZhCN);
        config.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(loaded, config);
        assert_eq!(loaded.locale(), Locale::ZhCN);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn partial_file_fills_defaults_and_clamps() {
        let path = temp_path("partial");
        std::fs::write(&path, "items_per_page = 0\nmax_page_buttons = 5\n").expect("write");
        let config = AppConfig::load_from(&path).expect("load");
        assert_eq!(config.items_per_page, 1);
        assert_eq!(config.max_page_buttons, 5);
        assert_eq!(config.capability_columns, DEFAULT_CAPABILITY_COLUMNS);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_path("malformed");
        std::fs::write(&path, "items_per_page = \"ten\"").expect("write");
        assert!(AppConfig::load_from(&path).is_err());
        let _ = std::fs::remove_file(&path);
    }
}

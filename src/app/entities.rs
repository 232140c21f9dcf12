//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency so views only re-render for what they observe.

use gpui::{App, AppContext, Entity, Global};
use tracing::{info, warn};

use crate::domain::DemoDataset;
use crate::state::{
    app_config::AppConfig, gallery_state::GalleryState, i18n_state::I18nState,
    user_access_state::UserAccessState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Persisted settings
    pub config: Entity<AppConfig>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
    /// Active story and small story-local state
    pub gallery: Entity<GalleryState>,
    /// Host state of the user access table
    pub user_access: Entity<UserAccessState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded config and demo data
    pub fn init(config: AppConfig, dataset: DemoDataset, cx: &mut App) -> Self {
        let locale = config.locale();
        let mut user_access = UserAccessState::new(dataset);
        user_access.apply_config(&config);

        Self {
            config: cx.new(|_| config),
            i18n: cx.new(|_| I18nState::new(locale)),
            gallery: cx.new(|_| GalleryState::default()),
            user_access: cx.new(|_| user_access),
        }
    }

    /// Switch language and persist the choice
    pub fn toggle_locale(&self, cx: &mut App) {
        let locale = self.i18n.update(cx, |i18n, cx| {
            i18n.toggle_locale();
            cx.notify();
            i18n.locale
        });
        info!(locale = locale.tag(), "Locale changed");

        self.config.update(cx, |config, _cx| {
            config.set_locale(locale);
            if let Err(e) = config.save() {
                warn!(error = %e, "Failed to save config");
            }
        });
    }
}

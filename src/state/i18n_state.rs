//! I18n State
//!
//! Current locale as a GPUI entity so views can observe language changes.

use crate::i18n::Locale;

/// Locale state
#[derive(Debug, Clone, Copy, Default)]
pub struct I18nState {
    pub locale: Locale,
}

impl I18nState {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Switch between the supported locales
    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggled();
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }
}

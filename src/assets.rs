//! Embedded assets for Arkem UI
//!
//! Uses rust-embed to bundle icons at compile time. Icons are addressed
//! through the closed [`IconName`] enum; parsing an unknown name fails instead
//! of resolving to a missing glyph at render time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

use crate::error::Error;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Our icons shadow the component library's
        if let Some(f) = Self::get(path) {
            return Ok(Some(f.data));
        }
        ComponentAssets::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            ComponentAssets::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

/// Every icon the design system can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IconName {
    // Controls
    Check,
    Minus,
    ChevronLeft,
    ChevronRight,
    Pencil,
    ArrowUpDown,
    Close,
    // Status
    Info,
    CheckCircle,
    AlertTriangle,
    XCircle,
    // Modules
    MonitorPlay,
    Users,
    Building,
    UserCog,
    Globe,
    FileText,
    Download,
}

impl IconName {
    const ALL: [IconName; 18] = [
        IconName::Check,
        IconName::Minus,
        IconName::ChevronLeft,
        IconName::ChevronRight,
        IconName::Pencil,
        IconName::ArrowUpDown,
        IconName::Close,
        IconName::Info,
        IconName::CheckCircle,
        IconName::AlertTriangle,
        IconName::XCircle,
        IconName::MonitorPlay,
        IconName::Users,
        IconName::Building,
        IconName::UserCog,
        IconName::Globe,
        IconName::FileText,
        IconName::Download,
    ];

    /// All icons, in declaration order
    pub fn all() -> &'static [IconName] {
        &Self::ALL
    }

    /// Symbolic name used in fixtures and configuration
    pub fn key(self) -> &'static str {
        match self {
            IconName::Check => "check",
            IconName::Minus => "minus",
            IconName::ChevronLeft => "chevron-left",
            IconName::ChevronRight => "chevron-right",
            IconName::Pencil => "pencil",
            IconName::ArrowUpDown => "arrow-up-down",
            IconName::Close => "x",
            IconName::Info => "info",
            IconName::CheckCircle => "check-circle",
            IconName::AlertTriangle => "alert-triangle",
            IconName::XCircle => "x-circle",
            IconName::MonitorPlay => "monitor-play",
            IconName::Users => "users",
            IconName::Building => "building",
            IconName::UserCog => "user-cog",
            IconName::Globe => "globe",
            IconName::FileText => "file-text",
            IconName::Download => "download",
        }
    }

    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        format!("icons/{}.svg", self.key()).into()
    }
}

impl FromStr for IconName {
    type Err = Error;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.key() == name)
            .ok_or_else(|| Error::UnknownIcon {
                name: name.to_string(),
            })
    }
}

impl TryFrom<String> for IconName {
    type Error = Error;

    fn try_from(name: String) -> std::result::Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<IconName> for String {
    fn from(icon: IconName) -> Self {
        icon.key().to_string()
    }
}

impl From<IconName> for Icon {
    fn from(val: IconName) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_parse() {
        for icon in IconName::all() {
            assert_eq!(icon.key().parse::<IconName>().ok(), Some(*icon));
        }
    }

    #[test]
    fn unknown_icon_is_rejected() {
        let err = "sparkles".parse::<IconName>().err();
        assert!(matches!(err, Some(Error::UnknownIcon { name }) if name == "sparkles"));
    }

    #[test]
    fn every_icon_is_embedded() {
        for icon in IconName::all() {
            assert!(
                Assets::get(&icon.path()).is_some(),
                "missing asset for {}",
                icon.key()
            );
        }
    }

    #[test]
    fn deserialize_rejects_unknown_names() {
        #[derive(Deserialize)]
        struct Holder {
            icon: IconName,
        }

        let ok: Holder = toml::from_str(r#"icon = "globe""#).expect("known icon");
        assert_eq!(ok.icon, IconName::Globe);
        assert!(toml::from_str::<Holder>(r#"icon = "globus""#).is_err());
    }
}

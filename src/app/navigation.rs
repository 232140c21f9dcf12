//! Navigation - Gallery Stories
//!
//! Defines the stories shown in the gallery sidebar.

use crate::assets::IconName;

/// Available stories in the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveStory {
    /// Paginated, sortable, multi-select user table
    #[default]
    UserAccess,
    /// Standalone pager
    Pagination,
    /// Checkbox, badge, button and field
    Primitives,
    /// Header and toast
    Feedback,
}

impl ActiveStory {
    /// Get the icon for the story
    pub fn icon(&self) -> IconName {
        match self {
            ActiveStory::UserAccess => IconName::Users,
            ActiveStory::Pagination => IconName::ChevronRight,
            ActiveStory::Primitives => IconName::Check,
            ActiveStory::Feedback => IconName::Info,
        }
    }

    /// Get the translation key for the story title
    pub fn title_key(&self) -> &'static str {
        match self {
            ActiveStory::UserAccess => "story-user-access",
            ActiveStory::Pagination => "story-pagination",
            ActiveStory::Primitives => "story-primitives",
            ActiveStory::Feedback => "story-feedback",
        }
    }

    /// Get all stories for the sidebar
    pub fn all() -> &'static [ActiveStory] {
        &[
            ActiveStory::UserAccess,
            ActiveStory::Pagination,
            ActiveStory::Primitives,
            ActiveStory::Feedback,
        ]
    }
}

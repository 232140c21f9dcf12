//! Keyboard Actions and Shortcuts
//!
//! Global actions, their key bindings and the labels shown for them.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::app::navigation::ActiveStory;

/// Application-level actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum AppAction {
    /// Quit the application
    Quit,
    /// Switch between English and Chinese
    ToggleLocale,
}

/// Gallery navigation actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum StoryAction {
    UserAccess,
    Pagination,
    Primitives,
    Feedback,
}

impl StoryAction {
    pub fn story(self) -> ActiveStory {
        match self {
            StoryAction::UserAccess => ActiveStory::UserAccess,
            StoryAction::Pagination => ActiveStory::Pagination,
            StoryAction::Primitives => ActiveStory::Primitives,
            StoryAction::Feedback => ActiveStory::Feedback,
        }
    }
}

/// Keystroke bound to a story
pub fn story_keystroke(story: ActiveStory) -> &'static str {
    match story {
        ActiveStory::UserAccess => "secondary-1",
        ActiveStory::Pagination => "secondary-2",
        ActiveStory::Primitives => "secondary-3",
        ActiveStory::Feedback => "secondary-4",
    }
}

/// Convert a keystroke string to human-readable format
///
/// macOS uses modifier symbols (⌘ ⌃ ⌥ ⇧) without separators; other platforms
/// spell modifiers out and join parts with `+`.
pub fn humanize_keystroke(keystroke: &str) -> String {
    let mac = cfg!(target_os = "macos");
    let separator = if mac { "" } else { "+" };

    keystroke
        .split('-')
        .map(|part| {
            let symbol = match (part, mac) {
                ("secondary" | "cmd", true) => "⌘",
                ("secondary" | "cmd" | "ctrl", false) => "Ctrl",
                ("ctrl", true) => "⌃",
                ("alt", true) => "⌥",
                ("alt", false) => "Alt",
                ("shift", true) => "⇧",
                ("shift", false) => "Shift",
                ("escape", _) => "Esc",
                (other, _) => return other.to_uppercase(),
            };
            symbol.to_string()
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("secondary-q", AppAction::Quit, None),
        KeyBinding::new("secondary-l", AppAction::ToggleLocale, None),
        KeyBinding::new(story_keystroke(ActiveStory::UserAccess), StoryAction::UserAccess, None),
        KeyBinding::new(story_keystroke(ActiveStory::Pagination), StoryAction::Pagination, None),
        KeyBinding::new(story_keystroke(ActiveStory::Primitives), StoryAction::Primitives, None),
        KeyBinding::new(story_keystroke(ActiveStory::Feedback), StoryAction::Feedback, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanizes_for_platform() {
        let label = humanize_keystroke("secondary-shift-k");
        if cfg!(target_os = "macos") {
            assert_eq!(label, "⌘⇧K");
        } else {
            assert_eq!(label, "Ctrl+Shift+K");
        }
    }

    #[test]
    fn every_story_has_an_action() {
        let actions = [
            StoryAction::UserAccess,
            StoryAction::Pagination,
            StoryAction::Primitives,
            StoryAction::Feedback,
        ];
        let stories: Vec<_> = actions.iter().map(|a| a.story()).collect();
        assert_eq!(stories, ActiveStory::all());
    }
}

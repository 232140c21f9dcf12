//! Arkem UI Library
//!
//! Design-system components for GPUI: a paginated, sortable, multi-select
//! user access table with its pager, plus the checkbox, badge, button, field,
//! header and toast primitives, and a gallery application that shows them.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod logger;
pub mod state;
pub mod theme;

//! User Access Feature
//!
//! Paginated, sortable, multi-select user table story.

pub mod controller;
pub mod page;

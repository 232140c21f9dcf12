//! Features - Gallery Stories
//!
//! Each story contains its page and, where it drives host state, a controller.

pub mod feedback;
pub mod pagination;
pub mod primitives;
pub mod user_access;

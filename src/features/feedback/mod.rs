//! Feedback Feature

pub mod page;

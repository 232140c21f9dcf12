//! Primitives Feature

pub mod page;

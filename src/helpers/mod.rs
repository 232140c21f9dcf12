//! Helpers - Shared Utilities
//!
//! Key bindings and filesystem locations.

pub mod action;
mod fs;

pub use fs::*;

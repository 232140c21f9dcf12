//! Theme - Design Tokens
//!
//! Color palette and type scale shared by every component.

pub mod colors;
pub mod typography;

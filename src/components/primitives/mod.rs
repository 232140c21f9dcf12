//! Primitive Components
//!
//! Basic building blocks like buttons, checkboxes and badges.

pub mod badge;
pub mod button;
pub mod checkbox;
pub mod field;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonHierarchy, ButtonSize, ButtonTone};
pub use checkbox::Checkbox;
pub use field::Field;

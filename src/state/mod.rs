//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by update frequency to avoid unnecessary re-renders.

pub mod app_config;
pub mod gallery_state;
pub mod i18n_state;
pub mod user_access_state;

//! Pagination Feature

pub mod page;

//! Data Table Components
//!
//! The user access table and the pagination bar that pages it.

pub mod pagination;
pub mod user_access_table;

pub use pagination::Pagination;
pub use user_access_table::UserAccessTable;

//! Composite Components
//!
//! Components assembled from primitives: the data table and toasts.

pub mod data_table;
pub mod toast;

pub use data_table::{Pagination, UserAccessTable};
pub use toast::{Toast, ToastData};

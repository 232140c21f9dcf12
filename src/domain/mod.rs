//! Domain - Pure Component State
//!
//! Pagination math, sorting, selection and table derivations. Nothing in
//! this module touches GPUI, so all of it is unit tested directly.

pub mod capability;
pub mod fixture;
pub mod pager;
pub mod selection;
pub mod sort;
pub mod table_view;
pub mod user;

pub use capability::{AccessCell, Capability, CapabilityCatalog, CapabilityColumn};
pub use fixture::DemoDataset;
pub use pager::{Pager, total_pages_for};
pub use selection::{CheckState, Selection, SelectionSummary};
pub use sort::{SortConfig, SortDirection, SortKey};
pub use table_view::{RowTarget, TableDisplay, UserTableView, ViewRow};
pub use user::{UserRecord, UserRole};

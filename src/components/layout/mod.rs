//! Layout Components
//!
//! Header, sidebar and section headers.

pub mod header;
pub mod header_xs;
pub mod sidebar;

pub use header::Header;
pub use header_xs::{HeaderXs, StatusVariant};
pub use sidebar::Sidebar;

//! UI Constants
//!
//! Centralized UI constants for consistent layout across the library.

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 220.0;

/// Header bar height
pub const HEADER_HEIGHT: f32 = 48.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1400.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;
pub const MIN_WINDOW_WIDTH: f32 = 800.0;
pub const MIN_WINDOW_HEIGHT: f32 = 500.0;

/// Pagination defaults
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const DEFAULT_MAX_PAGE_BUTTONS: usize = 10;
pub const DEFAULT_ITEM_LABEL: &str = "entries";

/// Module access columns shown by the user access table
pub const DEFAULT_CAPABILITY_COLUMNS: usize = 7;

/// Table geometry
pub const TABLE_ROW_HEIGHT: f32 = 44.0;
pub const TABLE_HEADER_HEIGHT: f32 = 36.0;
pub const CHECKBOX_COLUMN_WIDTH: f32 = 44.0;
pub const NAME_COLUMN_WIDTH: f32 = 200.0;
pub const ICON_COLUMN_WIDTH: f32 = 40.0;
pub const DATA_COLUMN_WIDTH: f32 = 110.0;

/// Toasts show at most this many data rows
pub const TOAST_MAX_DATA_ROWS: usize = 3;

/// Size of the generated data set in the pagination story
pub const PAGINATION_STORY_ITEMS: usize = 137;

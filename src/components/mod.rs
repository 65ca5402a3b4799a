//! UI Components
//!
//! Reusable Leptos components.

mod dropzone;
mod items_grid;
mod page_header;

pub use dropzone::Dropzone;
pub use items_grid::ItemsGrid;
pub use page_header::PageHeader;

//! Client-side search, filter and pagination for list screens
//!
//! Collections are fetched whole by a [`crate::ResourceStore`]; everything
//! here works on the cached slice.

mod filter;
mod pagination;
mod view;

pub use filter::{ListFilter, Searchable, filter_records, normalize_search};
pub use pagination::{PageToken, page_bounds, page_info, page_window, paginate};
pub use view::{ListView, PageView};

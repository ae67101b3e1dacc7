//! List screen state

use crate::config::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_WINDOW};

use super::filter::{ListFilter, Searchable, filter_records, normalize_search};
use super::pagination::{PageToken, page_bounds, page_info, page_window};

/// Search, filter and page of one list screen
///
/// Any change to the search term or the filter puts the view back on page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    search: String,
    filter: Option<ListFilter>,
    page: usize,
    page_size: usize,
    window: usize,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            filter: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            window: DEFAULT_PAGE_WINDOW,
        }
    }

    /// Zero is treated as 1
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_page_window(mut self, window: usize) -> Self {
        self.window = window.max(1);
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filter(&self) -> Option<&ListFilter> {
        self.filter.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_filter(&mut self, filter: ListFilter) {
        self.filter = Some(filter);
        self.page = 1;
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
        self.page = 1;
    }

    /// Jump to a 1-based page; pages past the end render empty
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Returns false when already on the last page
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if self.page < total_pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Returns false when already on page 1
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Render the current page of `records`
    pub fn view<'a, T: Searchable>(&self, records: &'a [T]) -> PageView<'a, T> {
        let filtered = filter_records(records, &self.search, self.filter.as_ref());
        let info = page_info(self.page, self.page_size, filtered.len());
        let total_pages = info.total_pages as usize;
        let items = filtered[page_bounds(self.page, self.page_size, filtered.len())].to_vec();
        tracing::trace!(
            search = %normalize_search(&self.search),
            page = self.page,
            total_items = filtered.len(),
            "list view"
        );
        PageView {
            items,
            page: self.page,
            total_pages,
            total_items: filtered.len(),
            tokens: page_window(self.page, total_pages, self.window),
        }
    }
}

/// One rendered page
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a, T> {
    pub items: Vec<&'a T>,
    pub page: usize,
    pub total_pages: usize,
    /// Records left after search and filter
    pub total_items: usize,
    pub tokens: Vec<PageToken>,
}

impl<T> PageView<'_, T> {
    /// Nothing matched; the screen shows its empty state
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

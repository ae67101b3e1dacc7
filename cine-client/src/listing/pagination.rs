//! Page slicing and the page-number window

use std::ops::Range;

use serde::Serialize;
use shared::Pagination;

/// Button in the page-number bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

/// Pagination metadata for `total_items` records
///
/// Values beyond `u32` saturate; slicing goes through [`page_bounds`].
pub fn page_info(page: usize, page_size: usize, total_items: usize) -> Pagination {
    Pagination::new(
        u32::try_from(page).unwrap_or(u32::MAX),
        u32::try_from(page_size).unwrap_or(u32::MAX),
        u64::try_from(total_items).unwrap_or(u64::MAX),
    )
}

/// Index range of the 1-based `page`; pages past the end are empty
pub fn page_bounds(page: usize, page_size: usize, total_items: usize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    start..end
}

/// Slice of the 1-based `page`
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_bounds(page, page_size, items.len())]
}

/// Page-number tokens for the bar
///
/// Up to `width` pages centered on `current`, shifted to stay inside
/// `1..=total_pages`. Each side that hides pages gets an ellipsis.
pub fn page_window(current: usize, total_pages: usize, width: usize) -> Vec<PageToken> {
    if total_pages == 0 || width == 0 {
        return Vec::new();
    }
    let width = width.min(total_pages);
    let current = current.clamp(1, total_pages);
    let start = current
        .saturating_sub(width / 2)
        .clamp(1, total_pages - width + 1);
    let end = start + width - 1;

    let mut tokens = Vec::with_capacity(width + 2);
    if start > 1 {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.extend((start..=end).map(PageToken::Page));
    if end < total_pages {
        tokens.push(PageToken::Ellipsis);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Ellipsis, Page};

    #[test]
    fn test_twenty_three_records() {
        let records: Vec<u32> = (1..=23).collect();
        assert_eq!(page_info(1, 10, records.len()).total_pages, 3);
        assert_eq!(paginate(&records, 1, 10), &records[0..10]);
        assert_eq!(paginate(&records, 3, 10), &[21, 22, 23]);
        assert!(paginate(&records, 4, 10).is_empty());
    }

    #[test]
    fn test_page_far_past_the_end_is_empty() {
        let records: Vec<u32> = (1..=23).collect();
        let page = (u32::MAX as usize) + 2;
        assert!(paginate(&records, page, 10).is_empty());
        assert!(paginate(&records, usize::MAX, usize::MAX).is_empty());
        assert_eq!(page_info(page, 10, records.len()).page, u32::MAX);
    }

    #[test]
    fn test_last_page_size() {
        for (n, p) in [(1usize, 10usize), (10, 10), (11, 10), (30, 7), (5, 1)] {
            let items: Vec<usize> = (0..n).collect();
            let info = page_info(1, p, n);
            assert_eq!(info.total_pages as usize, n.div_ceil(p));
            let last = paginate(&items, info.total_pages as usize, p);
            let expected = if n % p == 0 { p } else { n % p };
            assert_eq!(last.len(), expected, "n={n} p={p}");
        }
    }

    #[test]
    fn test_window_covers_all_pages() {
        assert_eq!(page_window(2, 3, 5), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_window(1, 5, 5).len(), 5);
        assert!(page_window(1, 0, 5).is_empty());
    }

    #[test]
    fn test_window_truncated_right() {
        assert_eq!(
            page_window(1, 10, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis]
        );
    }

    #[test]
    fn test_window_truncated_left() {
        assert_eq!(
            page_window(10, 10, 5),
            vec![Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_window_marks_both_sides() {
        assert_eq!(
            page_window(6, 12, 5),
            vec![Ellipsis, Page(4), Page(5), Page(6), Page(7), Page(8), Ellipsis]
        );
    }

    #[test]
    fn test_window_clamps_out_of_range_page() {
        assert_eq!(page_window(99, 7, 5).last(), Some(&Page(7)));
        assert_eq!(page_window(0, 7, 5).first(), Some(&Page(1)));
    }
}

//! Client-side pagination of an in-memory list.

use std::ops::Range;

/// Index range of `page` (zero-based) clamped to `total` items.
pub fn page_range(total: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}

/// Items shown on `page`; empty when the page lies past the end or `page_size` is 0.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_range(items.len(), page, page_size)]
}

/// Number of pages needed for `total` items (0 for an empty list).
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Pagination state of one table.
///
/// Each table owns its own instance, so changing one table's page size never
/// moves another table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TablePage {
    pub page: usize,
    pub page_size: usize,
}

impl TablePage {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Change the page size and go back to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    pub fn page_count(&self, total: usize) -> usize {
        page_count(total, self.page_size)
    }

    pub fn range(&self, total: usize) -> Range<usize> {
        page_range(total, self.page, self.page_size)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.page, self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page + 1 < self.page_count(total)
    }

    /// `"11-20 of 70"`; an empty table reads `"0-0 of 0"`.
    pub fn displayed_rows(&self, total: usize) -> String {
        let range = self.range(total);
        if range.is_empty() {
            return format!("0-0 of {}", total);
        }
        format!("{}-{} of {}", range.start + 1, range.end, total)
    }
}

impl Default for TablePage {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_basic() {
        let items: Vec<u32> = (1..=70).collect();
        assert_eq!(paginate(&items, 0, 10), &items[0..10]);
        assert_eq!(paginate(&items, 6, 10), &items[60..70]);
        assert!(paginate(&items, 7, 10).is_empty());
        assert_eq!(paginate(&items, 2, 25), &items[50..70]);
    }

    #[test]
    fn test_paginate_edge_cases() {
        let empty: Vec<u32> = Vec::new();
        assert!(paginate(&empty, 0, 10).is_empty());
        let items = [1, 2, 3];
        assert!(paginate(&items, 0, 0).is_empty());
        assert!(paginate(&items, usize::MAX, usize::MAX).is_empty());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(70, 10), 7);
        assert_eq!(page_count(30, 25), 2);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut table = TablePage::new(10);
        table.set_page(5);
        table.set_page_size(25);
        assert_eq!(table.page, 0);
        assert_eq!(table.page_size, 25);
    }

    #[test]
    fn test_tables_are_independent() {
        let mut first = TablePage::new(10);
        let mut second = TablePage::new(10);
        first.set_page(3);
        second.set_page(2);

        second.set_page_size(5);

        assert_eq!(first.page, 3);
        assert_eq!(first.page_size, 10);
        assert_eq!(second.page, 0);
    }

    #[test]
    fn test_zero_page_size_is_coerced() {
        let mut table = TablePage::new(0);
        assert_eq!(table.page_size, 1);
        table.set_page_size(0);
        assert_eq!(table.page_size, 1);
    }

    #[test]
    fn test_displayed_rows() {
        let mut table = TablePage::new(10);
        assert_eq!(table.displayed_rows(70), "1-10 of 70");
        table.set_page(6);
        assert_eq!(table.displayed_rows(70), "61-70 of 70");
        assert_eq!(table.displayed_rows(0), "0-0 of 0");
        table.set_page_size(50);
        table.set_page(0);
        assert_eq!(table.displayed_rows(30), "1-30 of 30");
    }

    #[test]
    fn test_navigation_flags() {
        let mut table = TablePage::new(25);
        assert!(!table.has_previous());
        assert!(table.has_next(30));
        table.set_page(1);
        assert!(table.has_previous());
        assert!(!table.has_next(30));
    }
}

//! Fixed-size client-side pagination.
//!
//! Pages are 1-indexed. Requests outside `1..=total_pages` are ignored rather
//! than clamped or wrapped.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use std::ops::Range;

/// Items per gallery page.
pub const GALLERY_PAGE_SIZE: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
    len: usize,
}

impl Pagination {
    /// Start on page 1. A zero page size is treated as 1.
    pub fn new(len: usize, page_size: usize) -> Self {
        Self { page: 1, page_size: page_size.max(1), len }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(len / page_size)`.
    pub fn total_pages(&self) -> usize {
        self.len.div_ceil(self.page_size)
    }

    /// Move to `page`. Returns `false` and leaves the page unchanged when
    /// `page` is outside `1..=total_pages`.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() {
            return false;
        }
        self.page = page;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.page + 1)
    }

    pub fn prev(&mut self) -> bool {
        // page is always >= 1, so page - 1 only reaches 0 on the first page.
        self.go_to(self.page - 1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Index range of the current page, clipped to `len`.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.len);
        let end = (start + self.page_size).min(self.len);
        start..end
    }

    /// Current page's slice of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// Page numbers for the numbered page buttons.
    pub fn pages(&self) -> impl Iterator<Item = usize> + use<> {
        1..=self.total_pages()
    }
}

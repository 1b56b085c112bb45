//! Pagination Window
//!
//! "Show more" reveals the list cumulatively in steps of `page_size`; the
//! visible window is always a prefix of the list. "Show less" collapses
//! straight back to one page.

use crate::models::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationWindow {
    page_size: usize,
    /// Requested count; may exceed the list length while the list is short
    shown: usize,
}

impl PaginationWindow {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            shown: page_size,
        }
    }

    /// Number of rows actually rendered for a list of `len` items
    pub fn visible_count(&self, len: usize) -> usize {
        self.shown.min(len)
    }

    pub fn visible<'a>(&self, items: &'a [Item]) -> &'a [Item] {
        &items[..self.visible_count(items.len())]
    }

    pub fn can_show_more(&self, len: usize) -> bool {
        self.shown < len
    }

    /// Only offered once the list is fully expanded
    pub fn can_show_less(&self, len: usize) -> bool {
        len > self.page_size && self.shown >= len
    }

    pub fn show_more(&mut self, len: usize) {
        self.shown = (self.shown + self.page_size).min(len);
        self.reclamp(len);
    }

    pub fn show_less(&mut self) {
        self.shown = self.page_size;
    }

    /// Must run after every store mutation that changes the length.
    pub fn reclamp(&mut self, len: usize) {
        if self.shown > len {
            self.shown = len;
        }
        if len <= self.page_size {
            self.shown = self.page_size;
        }
    }
}

//! Horizontal paging over the date window.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Offset into the date window plus the sizes that bound it.
///
/// Paging is a clamp, never an error: calls at a boundary leave the offset
/// untouched and the matching affordance reports disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginator {
    offset: usize,
    window_len: usize,
    date_columns: usize,
}

impl Paginator {
    pub fn new(window_len: usize, date_columns: usize) -> Self {
        Self {
            offset: 0,
            window_len,
            date_columns,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn window_len(&self) -> usize {
        self.window_len
    }

    pub fn date_columns(&self) -> usize {
        self.date_columns
    }

    /// Largest offset that still fills a page (0 when the window is shorter).
    pub fn max_offset(&self) -> usize {
        self.window_len.saturating_sub(self.date_columns)
    }

    pub fn can_prev(&self) -> bool {
        self.offset > 0
    }

    pub fn can_next(&self) -> bool {
        self.offset < self.max_offset()
    }

    /// Advance one page. Returns whether the offset moved.
    pub fn next_page(&mut self) -> bool {
        let target = self
            .offset
            .saturating_add(self.date_columns)
            .min(self.max_offset());
        self.move_to(target)
    }

    /// Go back one page. Returns whether the offset moved.
    pub fn prev_page(&mut self) -> bool {
        let target = self.offset.saturating_sub(self.date_columns);
        self.move_to(target)
    }

    fn move_to(&mut self, target: usize) -> bool {
        let moved = target != self.offset;
        self.offset = target;
        moved
    }

    /// Apply a new page width, keeping the current offset where it still fits.
    pub fn set_date_columns(&mut self, date_columns: usize) {
        self.date_columns = date_columns;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Point at a different window; always starts over at the first page.
    pub fn reset(&mut self, window_len: usize) {
        self.window_len = window_len;
        self.offset = 0;
    }

    /// Window indices shown on the current page.
    pub fn visible_range(&self) -> Range<usize> {
        let end = self.offset.saturating_add(self.date_columns).min(self.window_len);
        self.offset.min(end)..end
    }

    /// Blank date columns needed to fill the current page.
    pub fn padding(&self) -> usize {
        self.date_columns.saturating_sub(self.visible_range().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_zero() {
        let pager = Paginator::new(30, 9);
        assert_eq!(pager.offset(), 0);
        assert_eq!(pager.visible_range(), 0..9);
        assert!(!pager.can_prev());
        assert!(pager.can_next());
    }

    #[test]
    fn test_next_page_clamps_to_last_full_page() {
        let mut pager = Paginator::new(30, 9);
        assert!(pager.next_page());
        assert_eq!(pager.offset(), 9);
        assert!(pager.next_page());
        assert_eq!(pager.offset(), 18);
        assert!(pager.next_page());
        assert_eq!(pager.offset(), 21);
        assert_eq!(pager.visible_range(), 21..30);
        assert!(!pager.can_next());
    }

    #[test]
    fn test_next_page_idempotent_at_end() {
        let mut pager = Paginator::new(12, 3);
        while pager.next_page() {}
        let at_end = pager;
        assert!(!pager.next_page());
        assert!(!pager.next_page());
        assert_eq!(pager, at_end);
        assert_eq!(pager.offset(), 9);
    }

    #[test]
    fn test_prev_page_clamps_at_zero() {
        let mut pager = Paginator::new(30, 9);
        pager.next_page();
        pager.next_page();
        pager.next_page();
        assert!(pager.prev_page());
        assert_eq!(pager.offset(), 12);
        assert!(pager.prev_page());
        assert_eq!(pager.offset(), 3);
        assert!(pager.prev_page());
        assert_eq!(pager.offset(), 0);
        assert!(!pager.prev_page());
        assert_eq!(pager.offset(), 0);
    }

    #[test]
    fn test_short_window_never_pages() {
        let mut pager = Paginator::new(7, 9);
        assert_eq!(pager.max_offset(), 0);
        assert!(!pager.next_page());
        assert!(!pager.can_next());
        assert_eq!(pager.visible_range(), 0..7);
        assert_eq!(pager.padding(), 2);
    }

    #[test]
    fn test_resize_keeps_offset_when_it_fits() {
        let mut pager = Paginator::new(30, 3);
        pager.next_page();
        pager.next_page();
        assert_eq!(pager.offset(), 6);
        pager.set_date_columns(9);
        assert_eq!(pager.offset(), 6);
        assert_eq!(pager.visible_range(), 6..15);
    }

    #[test]
    fn test_resize_reclamps_offset() {
        let mut pager = Paginator::new(12, 3);
        while pager.next_page() {}
        assert_eq!(pager.offset(), 9);
        pager.set_date_columns(9);
        assert_eq!(pager.offset(), 3);
        assert!(!pager.can_next());
    }

    #[test]
    fn test_reset_returns_to_start() {
        let mut pager = Paginator::new(30, 9);
        pager.next_page();
        pager.reset(14);
        assert_eq!(pager.offset(), 0);
        assert_eq!(pager.window_len(), 14);
        assert_eq!(pager.max_offset(), 5);
    }

    #[test]
    fn test_empty_window() {
        let mut pager = Paginator::new(0, 9);
        assert!(pager.visible_range().is_empty());
        assert_eq!(pager.padding(), 9);
        assert!(!pager.next_page());
        assert!(!pager.prev_page());
    }
}

//! Viewport
//!
//! A scroll window over the rendered list. The list is followed by a sentinel
//! element a few rows tall; how much of it is inside the window is what the
//! proximity trigger observes.

use std::ops::Range;

/// Height of the list-end sentinel in rows
pub const SENTINEL_ROWS: usize = 2;

/// Visible window over `total` list rows plus the sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    rows: usize,
}

impl Viewport {
    pub fn new(rows: usize) -> Self {
        Self {
            offset: 0,
            rows: rows.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Largest offset that still fills the window
    fn max_offset(&self, total: usize) -> usize {
        (total + SENTINEL_ROWS).saturating_sub(self.rows)
    }

    pub fn scroll_down(&mut self, by: usize, total: usize) {
        self.offset = (self.offset + by).min(self.max_offset(total));
    }

    pub fn scroll_up(&mut self, by: usize) {
        self.offset = self.offset.saturating_sub(by);
    }

    /// Jump back to the top
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Pull the offset back in range after the list shrank
    pub fn clamp(&mut self, total: usize) {
        self.offset = self.offset.min(self.max_offset(total));
    }

    /// Indices of the list rows inside the window
    pub fn visible_range(&self, total: usize) -> Range<usize> {
        let start = self.offset.min(total);
        let end = (self.offset + self.rows).min(total);
        start..end
    }

    /// Fraction of the sentinel inside the window (0.0 - 1.0)
    pub fn sentinel_visibility(&self, total: usize) -> f32 {
        let window = self.offset..self.offset + self.rows;
        let sentinel = total..total + SENTINEL_ROWS;

        let overlap_start = window.start.max(sentinel.start);
        let overlap_end = window.end.min(sentinel.end);
        let visible = overlap_end.saturating_sub(overlap_start);

        visible as f32 / SENTINEL_ROWS as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_list_shows_the_whole_sentinel() {
        let viewport = Viewport::new(8);
        assert_eq!(viewport.visible_range(3), 0..3);
        assert_eq!(viewport.sentinel_visibility(3), 1.0);
    }

    #[test]
    fn long_list_hides_the_sentinel_until_scrolled() {
        let mut viewport = Viewport::new(8);
        assert_eq!(viewport.sentinel_visibility(20), 0.0);

        viewport.scroll_down(13, 20);
        assert_eq!(viewport.visible_range(20), 13..20);
        assert_eq!(viewport.sentinel_visibility(20), 0.5);

        viewport.scroll_down(1, 20);
        assert_eq!(viewport.sentinel_visibility(20), 1.0);
    }

    #[test]
    fn scrolling_is_bounded() {
        let mut viewport = Viewport::new(8);
        viewport.scroll_down(100, 20);
        assert_eq!(viewport.offset(), 14);
        viewport.scroll_up(100);
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn growing_list_pushes_the_sentinel_out_of_view() {
        let mut viewport = Viewport::new(8);
        viewport.scroll_down(100, 20);
        assert_eq!(viewport.sentinel_visibility(20), 1.0);
        assert_eq!(viewport.sentinel_visibility(40), 0.0);
    }

    #[test]
    fn clamp_after_shrinking() {
        let mut viewport = Viewport::new(4);
        viewport.scroll_down(30, 40);
        viewport.clamp(5);
        assert_eq!(viewport.offset(), 3);
        assert_eq!(viewport.visible_range(5), 3..5);
    }
}

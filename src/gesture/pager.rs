//! Horizontally paged track list.

use crate::player::Direction;

/// Scroll state of the paged track list. One page per track, each as wide
/// as the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Pager {
    page_width: f32,
    offset: f32,
}

impl Pager {
    pub fn new(page_width: f32) -> Self {
        Self {
            page_width,
            offset: 0.0,
        }
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    /// Scroll offset in pixels.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Free scrolling.
    pub fn scroll_to(&mut self, offset: f32) {
        self.offset = offset.max(0.0);
    }

    /// Jump to the page of `index`.
    pub fn show_page(&mut self, index: usize) {
        self.offset = index as f32 * self.page_width;
    }

    /// Change page width, staying on the page of `index`.
    pub fn set_page_width(&mut self, page_width: f32, index: usize) {
        self.page_width = page_width;
        self.show_page(index);
    }

    /// Page nearest to the current offset.
    pub fn nearest_page(&self) -> usize {
        if self.page_width <= 0.0 {
            return 0;
        }
        (self.offset / self.page_width).round().max(0.0) as usize
    }

    /// Scrolling came to rest. Compares the nearest page with `current` and
    /// returns a single step towards it.
    pub fn settle(&self, current: usize) -> Option<Direction> {
        let page = self.nearest_page();
        match page.cmp(&current) {
            std::cmp::Ordering::Greater => Some(Direction::Next),
            std::cmp::Ordering::Less => Some(Direction::Prev),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_rounds_to_nearest_page() {
        let mut pager = Pager::new(400.0);
        pager.scroll_to(210.0);
        assert_eq!(pager.nearest_page(), 1);
        assert_eq!(pager.settle(0), Some(Direction::Next));

        pager.scroll_to(190.0);
        assert_eq!(pager.settle(0), None);
        assert_eq!(pager.settle(1), Some(Direction::Prev));
    }

    #[test]
    fn test_far_scroll_is_single_step() {
        let mut pager = Pager::new(400.0);
        pager.scroll_to(1600.0);
        assert_eq!(pager.settle(1), Some(Direction::Next));
    }

    #[test]
    fn test_show_page_and_resize() {
        let mut pager = Pager::new(400.0);
        pager.show_page(2);
        assert_eq!(pager.offset(), 800.0);
        pager.set_page_width(300.0, 2);
        assert_eq!(pager.offset(), 600.0);
    }

    #[test]
    fn test_zero_width_pages() {
        let mut pager = Pager::new(0.0);
        pager.scroll_to(50.0);
        assert_eq!(pager.nearest_page(), 0);
    }
}

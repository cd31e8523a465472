//! Page-window arithmetic for the numbered pagination bar.

use std::ops::RangeInclusive;

/// What the pagination bar should render for a given position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNav {
    pub current: u32,
    pub total: u32,
    pub window: RangeInclusive<u32>,
}

impl PageNav {
    /// `None` when there is a single page (nothing to render).
    pub fn new(current: u32, total: u32, max_visible: u32) -> Option<Self> {
        if total <= 1 {
            return None;
        }
        let current = current.clamp(1, total);
        Some(Self {
            current,
            total,
            window: page_window(current, total, max_visible),
        })
    }

    pub fn at_start(&self) -> bool {
        self.current == 1
    }

    pub fn at_end(&self) -> bool {
        self.current == self.total
    }

    pub fn prev(&self) -> u32 {
        self.current.saturating_sub(1).max(1)
    }

    pub fn next(&self) -> u32 {
        (self.current + 1).min(self.total)
    }
}

/// Up to `max_visible` page numbers centred on `current`, shifted so the
/// window never leaves `1..=total`.
pub fn page_window(current: u32, total: u32, max_visible: u32) -> RangeInclusive<u32> {
    let total = total.max(1);
    let max_visible = max_visible.max(1);
    let current = current.clamp(1, total);

    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total);
    if end - start + 1 < max_visible {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }
    start..=end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_centred_in_the_middle() {
        assert_eq!(page_window(10, 20, 5), 8..=12);
    }

    #[test]
    fn window_shifts_at_the_edges() {
        assert_eq!(page_window(1, 20, 5), 1..=5);
        assert_eq!(page_window(2, 20, 5), 1..=5);
        assert_eq!(page_window(20, 20, 5), 16..=20);
        assert_eq!(page_window(19, 20, 5), 16..=20);
    }

    #[test]
    fn window_shrinks_with_few_pages() {
        assert_eq!(page_window(2, 3, 5), 1..=3);
        assert_eq!(page_window(1, 1, 5), 1..=1);
    }

    #[test]
    fn nav_is_hidden_for_single_page() {
        assert!(PageNav::new(1, 1, 5).is_none());
        assert!(PageNav::new(1, 0, 5).is_none());
    }

    #[test]
    fn nav_edges_disable_buttons() {
        let nav = PageNav::new(1, 4, 5).unwrap();
        assert!(nav.at_start());
        assert!(!nav.at_end());
        assert_eq!(nav.prev(), 1);
        assert_eq!(nav.next(), 2);

        let nav = PageNav::new(9, 4, 5).unwrap();
        assert_eq!(nav.current, 4);
        assert!(nav.at_end());
        assert_eq!(nav.next(), 4);
    }
}

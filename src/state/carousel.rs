use std::ops::Range;
use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::config::MOBILE_BREAKPOINT_PX;

/// One card per page on narrow viewports, three otherwise.
pub fn page_size_for_width(width: f64) -> usize {
    if width < MOBILE_BREAKPOINT_PX {
        1
    } else {
        3
    }
}

/// Windowed, cyclic view over `len` items showing `per_view` of them from `index`.
///
/// `index` always stays within `0..=len - per_view`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    per_view: usize,
    index: usize,
    hovered: bool,
    focused: bool,
}

impl Carousel {
    pub fn new(len: usize, per_view: usize) -> Self {
        let mut carousel = Self {
            len,
            per_view: 1,
            index: 0,
            hovered: false,
            focused: false,
        };
        carousel.resize(per_view);
        carousel
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    pub fn max_index(&self) -> usize {
        self.len.saturating_sub(self.per_view)
    }

    /// Number of pagination dots.
    pub fn page_count(&self) -> usize {
        self.max_index() + 1
    }

    pub fn visible(&self) -> Range<usize> {
        self.index..(self.index + self.per_view).min(self.len)
    }

    /// Paused while the pointer is over the carousel or keyboard focus is inside it.
    pub fn is_autoplaying(&self) -> bool {
        !self.hovered && !self.focused && self.page_count() > 1
    }

    pub fn next(&mut self) {
        self.index = if self.index >= self.max_index() { 0 } else { self.index + 1 };
    }

    pub fn prev(&mut self) {
        self.index = if self.index == 0 { self.max_index() } else { self.index - 1 };
    }

    /// Jumps to a page; out-of-range requests are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index <= self.max_index() {
            self.index = index;
        }
    }

    /// Applies a new page size and clamps the index into the new bound.
    pub fn resize(&mut self, per_view: usize) {
        self.per_view = per_view.clamp(1, self.len.max(1));
        self.index = self.index.min(self.max_index());
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
    Resize(usize),
    Hover(bool),
    Focus(bool),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next => next.next(),
            CarouselAction::Prev => next.prev(),
            CarouselAction::GoTo(index) => next.go_to(index),
            CarouselAction::Resize(per_view) => next.resize(per_view),
            CarouselAction::Hover(hovered) => next.set_hovered(hovered),
            CarouselAction::Focus(focused) => next.set_focused(focused),
        }
        if next == *self {
            return self;
        }
        debug!("carousel index {} of {} (per view {})", next.index, next.page_count(), next.per_view);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_at_last_page() {
        let mut c = Carousel::new(4, 3);
        assert_eq!(c.max_index(), 1);
        c.next();
        assert_eq!(c.index(), 1);
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn prev_wraps_to_last_page() {
        let mut c = Carousel::new(4, 1);
        c.prev();
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn next_then_prev_restores_every_index() {
        for per_view in [1, 3] {
            let c = Carousel::new(4, per_view);
            for start in 0..=c.max_index() {
                let mut c = c.clone();
                c.go_to(start);
                c.next();
                c.prev();
                assert_eq!(c.index(), start);
            }
        }
    }

    #[test]
    fn cycle_length_is_page_count() {
        for per_view in [1, 3] {
            let mut c = Carousel::new(4, per_view);
            for start in 0..c.page_count() {
                c.go_to(start);
                for _ in 0..c.page_count() {
                    c.next();
                }
                assert_eq!(c.index(), start);
            }
        }
    }

    #[test]
    fn page_count_matches_windows() {
        assert_eq!(Carousel::new(4, 3).page_count(), 2);
        assert_eq!(Carousel::new(4, 1).page_count(), 4);
    }

    #[test]
    fn visible_shows_exactly_per_view_items() {
        let mut c = Carousel::new(4, 3);
        c.next();
        assert_eq!(c.visible(), 1..4);
    }

    #[test]
    fn growing_page_size_reclamps_index() {
        let mut c = Carousel::new(4, 1);
        c.go_to(3);
        c.resize(3);
        assert_eq!(c.index(), 1);
        assert_eq!(c.visible(), 1..4);
    }

    #[test]
    fn shrinking_page_size_keeps_index() {
        let mut c = Carousel::new(4, 3);
        c.go_to(1);
        c.resize(1);
        assert_eq!(c.index(), 1);
        assert_eq!(c.max_index(), 3);
    }

    #[test]
    fn page_size_larger_than_list_is_a_single_page() {
        let mut c = Carousel::new(2, 3);
        assert_eq!(c.per_view(), 2);
        assert_eq!(c.page_count(), 1);
        c.next();
        assert_eq!(c.index(), 0);
        assert!(!c.is_autoplaying());
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut c = Carousel::new(4, 3);
        c.go_to(2);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn hover_suspends_autoplay() {
        let mut c = Carousel::new(4, 3);
        assert!(c.is_autoplaying());
        c.set_hovered(true);
        assert!(!c.is_autoplaying());
        c.set_hovered(false);
        assert!(c.is_autoplaying());
    }

    #[test]
    fn focus_keeps_autoplay_paused_after_pointer_leaves() {
        let mut c = Carousel::new(4, 3);
        c.set_focused(true);
        c.set_hovered(true);
        c.set_hovered(false);
        assert!(!c.is_autoplaying());
        c.set_focused(false);
        assert!(c.is_autoplaying());
    }

    #[test]
    fn pointer_keeps_autoplay_paused_after_focus_leaves() {
        let c = Rc::new(Carousel::new(4, 3));
        let c = c
            .reduce(CarouselAction::Hover(true))
            .reduce(CarouselAction::Focus(true))
            .reduce(CarouselAction::Focus(false));
        assert!(!c.is_autoplaying());
        let c = c.reduce(CarouselAction::Hover(false));
        assert!(c.is_autoplaying());
    }

    #[test]
    fn breakpoint_picks_page_size() {
        assert_eq!(page_size_for_width(375.0), 1);
        assert_eq!(page_size_for_width(767.9), 1);
        assert_eq!(page_size_for_width(768.0), 3);
        assert_eq!(page_size_for_width(1440.0), 3);
    }

    #[test]
    fn reducer_returns_same_rc_when_nothing_changes() {
        let c = Rc::new(Carousel::new(4, 3));
        let same = c.clone().reduce(CarouselAction::GoTo(9));
        assert!(Rc::ptr_eq(&c, &same));
        let moved = c.clone().reduce(CarouselAction::Next);
        assert_eq!(moved.index(), 1);
    }
}

use std::rc::Rc;

use yew::Reducible;

use crate::config::NAV_SCROLL_THRESHOLD_PX;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

pub enum NavAction {
    ToggleMenu,
    CloseMenu,
    /// Latest vertical scroll offset of the window.
    Scroll(f64),
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > NAV_SCROLL_THRESHOLD_PX
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::ToggleMenu => NavState { menu_open: !self.menu_open, ..*self },
            NavAction::CloseMenu => NavState { menu_open: false, ..*self },
            NavAction::Scroll(offset) => NavState { scrolled: is_scrolled(offset), ..*self },
        };
        // scroll fires constantly; skip re-renders when nothing flipped
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn menu_toggles_and_closes() {
        let nav = Rc::new(NavState::default());
        let nav = nav.reduce(NavAction::ToggleMenu);
        assert!(nav.menu_open);
        let nav = nav.reduce(NavAction::CloseMenu);
        assert!(!nav.menu_open);
        let nav = nav.reduce(NavAction::CloseMenu);
        assert!(!nav.menu_open);
    }

    #[test]
    fn repeated_scroll_events_keep_the_same_state() {
        let nav = Rc::new(NavState::default()).reduce(NavAction::Scroll(200.0));
        assert!(nav.scrolled);
        let again = nav.clone().reduce(NavAction::Scroll(300.0));
        assert!(Rc::ptr_eq(&nav, &again));
    }
}

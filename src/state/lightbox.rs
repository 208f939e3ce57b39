use std::rc::Rc;

use log::info;
use yew::Reducible;

/// Gallery overlay: which pair is open and which half of it is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    selected: Option<usize>,
    showing_after: bool,
}

impl Lightbox {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn showing_after(&self) -> bool {
        self.showing_after
    }

    /// Opening always starts on the "after" image.
    pub fn open(&mut self, index: usize) {
        self.selected = Some(index);
        self.showing_after = true;
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.showing_after = !self.showing_after;
        }
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}

pub enum LightboxAction {
    Open(usize),
    Toggle,
    Close,
}

impl Reducible for Lightbox {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            LightboxAction::Open(index) => {
                info!("Opening gallery item {}", index);
                next.open(index);
            }
            LightboxAction::Toggle => next.toggle(),
            LightboxAction::Close => next.close(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_defaults_to_after() {
        let mut lb = Lightbox::default();
        lb.open(2);
        assert_eq!(lb.selected(), Some(2));
        assert!(lb.showing_after());
    }

    #[test]
    fn toggling_twice_returns_to_after() {
        let mut lb = Lightbox::default();
        lb.open(0);
        lb.toggle();
        assert!(!lb.showing_after());
        lb.toggle();
        assert!(lb.showing_after());
    }

    #[test]
    fn reopening_resets_the_toggle() {
        let mut lb = Lightbox::default();
        lb.open(1);
        lb.toggle();
        lb.close();
        assert!(!lb.is_open());
        lb.open(3);
        assert!(lb.showing_after());
    }

    #[test]
    fn toggle_while_closed_does_nothing() {
        let mut lb = Lightbox::default();
        lb.toggle();
        assert_eq!(lb, Lightbox::default());
    }
}

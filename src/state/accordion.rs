use std::rc::Rc;

use log::debug;
use yew::Reducible;

/// Single-open disclosure list. Expansion is a projection of `active`, never a per-item flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    active: Option<u32>,
}

impl Accordion {
    pub fn is_expanded(&self, id: u32) -> bool {
        self.active == Some(id)
    }

    /// Collapses `id` if it is open, otherwise opens it and closes any other.
    pub fn toggle(&mut self, id: u32) {
        self.active = if self.active == Some(id) { None } else { Some(id) };
    }
}

impl Reducible for Accordion {
    /// Header of the item that was selected.
    type Action = u32;

    fn reduce(self: Rc<Self>, id: u32) -> Rc<Self> {
        let mut next = *self;
        next.toggle(id);
        debug!("accordion active item: {:?}", next.active);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let acc = Accordion::default();
        assert_eq!(acc, Accordion::default());
        assert!(!(1..=6).any(|id| acc.is_expanded(id)));
    }

    #[test]
    fn opening_another_item_closes_the_previous_one() {
        let mut acc = Accordion::default();
        acc.toggle(2);
        assert!(acc.is_expanded(2));
        acc.toggle(3);
        assert!(acc.is_expanded(3));
        assert!(!acc.is_expanded(2));
        acc.toggle(3);
        assert_eq!(acc, Accordion::default());
    }

    #[test]
    fn at_most_one_item_expanded_after_any_sequence() {
        let mut acc = Accordion::default();
        for id in [1, 2, 2, 3, 1, 1, 3, 2] {
            acc.toggle(id);
            let open = [1, 2, 3].iter().filter(|&&i| acc.is_expanded(i)).count();
            assert!(open <= 1);
        }
    }

    #[test]
    fn rapid_clicks_restart_the_transition() {
        // a second click mid-animation is just another state change
        let acc = Rc::new(Accordion::default());
        let acc = acc.reduce(1).reduce(1).reduce(2);
        assert!(acc.is_expanded(2));
        assert!(!acc.is_expanded(1));
    }
}

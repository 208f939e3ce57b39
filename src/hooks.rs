use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

use crate::config::REVEAL_AMOUNT;

/// Window event subscription that unsubscribes itself when dropped.
pub struct WindowListener {
    window: Window,
    events: &'static [&'static str],
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(events: &'static [&'static str], callback: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        for event in events {
            if let Err(e) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
                warn!("Could not listen for {}: {:?}", event, e);
            }
        }
        Some(Self { window, events, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        for event in self.events {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref())
            {
                warn!("Could not stop listening for {}: {:?}", event, e);
            }
        }
    }
}

pub fn scroll_offset() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

/// Whether an element spanning `top..bottom` (viewport coordinates) is far enough
/// on screen. Elements taller than the viewport only need `amount` of the viewport.
pub fn should_reveal(top: f64, bottom: f64, viewport_height: f64, amount: f64) -> bool {
    let height = bottom - top;
    let visible = bottom.min(viewport_height) - top.max(0.0);
    if height <= 0.0 {
        return top >= 0.0 && top <= viewport_height;
    }
    visible > 0.0 && visible >= height.min(viewport_height) * amount
}

/// Window events worth watching for a reveal; none once it has latched.
pub fn reveal_events(revealed: bool) -> &'static [&'static str] {
    if revealed {
        &[]
    } else {
        &["scroll", "resize"]
    }
}

/// Latches `true` the first time the referenced element scrolls into view.
#[hook]
pub fn use_reveal_once(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let handle = revealed.clone();
        use_effect_with_deps(
            move |(node, revealed): &(NodeRef, bool)| {
                let events = reveal_events(*revealed);
                let revealed = handle;
                let node = node.clone();
                let check = move || {
                    let Some(element) = node.cast::<Element>() else {
                        return;
                    };
                    let Some(height) = viewport_height() else {
                        return;
                    };
                    let rect = element.get_bounding_client_rect();
                    if should_reveal(rect.top(), rect.bottom(), height, REVEAL_AMOUNT) {
                        revealed.set(true);
                    }
                };

                // re-run on latch so the listeners go away
                let listener = if events.is_empty() {
                    None
                } else {
                    // already on screen at mount
                    check();
                    WindowListener::new(events, check)
                };

                move || drop(listener)
            },
            (node, *revealed),
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_the_fold_is_not_revealed() {
        assert!(!should_reveal(900.0, 1_300.0, 800.0, 0.2));
    }

    #[test]
    fn a_sliver_is_not_enough() {
        // 40px of a 400px card
        assert!(!should_reveal(760.0, 1_160.0, 800.0, 0.2));
    }

    #[test]
    fn twenty_percent_reveals() {
        assert!(should_reveal(720.0, 1_120.0, 800.0, 0.2));
    }

    #[test]
    fn tall_sections_use_the_viewport_as_reference() {
        // 3000px grid, 200px of it on an 800px screen
        assert!(should_reveal(600.0, 3_600.0, 800.0, 0.2));
        assert!(!should_reveal(700.0, 3_700.0, 800.0, 0.2));
    }

    #[test]
    fn listeners_are_released_once_revealed() {
        assert_eq!(reveal_events(false), &["scroll", "resize"]);
        assert!(reveal_events(true).is_empty());
    }

    #[test]
    fn scrolled_past_is_not_revealed() {
        assert!(!should_reveal(-500.0, -100.0, 800.0, 0.2));
    }
}

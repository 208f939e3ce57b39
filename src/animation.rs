//! Declarative animation descriptors.
//!
//! Sections never branch on animation progress. They attach an [`Animation`]
//! to an element and render its CSS; the browser runs the timeline.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyframes {
    FadeIn,
    FadeUp,
    FadeDown,
    ScaleIn,
    SlideLeft,
    SlideRight,
    DriveIn,
    PulseGlow,
}

impl Keyframes {
    pub fn name(self) -> &'static str {
        match self {
            Keyframes::FadeIn => "cw-fade-in",
            Keyframes::FadeUp => "cw-fade-up",
            Keyframes::FadeDown => "cw-fade-down",
            Keyframes::ScaleIn => "cw-scale-in",
            Keyframes::SlideLeft => "cw-slide-left",
            Keyframes::SlideRight => "cw-slide-right",
            Keyframes::DriveIn => "cw-drive-in",
            Keyframes::PulseGlow => "cw-pulse-glow",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Plays as soon as the element is mounted.
    Mount,
    /// Held hidden until the element scrolls into view, then plays once.
    InView,
    /// Transition applied to hover/press transforms.
    Hover,
    Loop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
    Spring,
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let css = match self {
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            // overshooting curve approximating a damped spring
            Easing::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        };
        f.write_str(css)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    pub keyframes: Keyframes,
    pub trigger: Trigger,
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Animation {
    pub const fn on_mount(keyframes: Keyframes, duration_ms: u32) -> Self {
        Self {
            keyframes,
            trigger: Trigger::Mount,
            delay_ms: 0,
            duration_ms,
            easing: Easing::EaseOut,
        }
    }

    pub const fn in_view(keyframes: Keyframes, duration_ms: u32) -> Self {
        Self {
            keyframes,
            trigger: Trigger::InView,
            delay_ms: 0,
            duration_ms,
            easing: Easing::EaseOut,
        }
    }

    pub const fn looping(keyframes: Keyframes, duration_ms: u32) -> Self {
        Self {
            keyframes,
            trigger: Trigger::Loop,
            delay_ms: 0,
            duration_ms,
            easing: Easing::EaseInOut,
        }
    }

    pub const fn hover(duration_ms: u32) -> Self {
        Self {
            keyframes: Keyframes::FadeIn,
            trigger: Trigger::Hover,
            delay_ms: 0,
            duration_ms,
            easing: Easing::EaseOut,
        }
    }

    pub const fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Offsets the delay for the `index`-th child of a staggered group.
    pub fn stagger(self, initial_ms: u32, step_ms: u32, index: usize) -> Self {
        let step = step_ms.saturating_mul(index as u32);
        self.delay(self.delay_ms + initial_ms + step)
    }

    /// Inline style for the element. `revealed` only matters for `InView`.
    pub fn style(&self, revealed: bool) -> String {
        match self.trigger {
            Trigger::Hover => format!(
                "transition: transform {}ms {} {}ms, box-shadow {}ms {};",
                self.duration_ms, self.easing, self.delay_ms, self.duration_ms, self.easing
            ),
            Trigger::InView if !revealed => "opacity: 0;".to_string(),
            Trigger::Loop => format!(
                "animation: {} {}ms {} {}ms infinite;",
                self.keyframes.name(),
                self.duration_ms,
                self.easing,
                self.delay_ms
            ),
            Trigger::Mount | Trigger::InView => format!(
                "animation: {} {}ms {} {}ms both;",
                self.keyframes.name(),
                self.duration_ms,
                self.easing,
                self.delay_ms
            ),
        }
    }
}

/// Keyframes and hover helpers shared by every section. Rendered once by the page.
pub const STYLESHEET: &str = r#"
@keyframes cw-fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}
@keyframes cw-fade-up {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes cw-fade-down {
    from { opacity: 0; transform: translateY(-20px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes cw-scale-in {
    from { opacity: 0; transform: scale(0.9); }
    to { opacity: 1; transform: scale(1); }
}
@keyframes cw-slide-left {
    from { opacity: 0; transform: translateX(-20px); }
    to { opacity: 1; transform: translateX(0); }
}
@keyframes cw-slide-right {
    from { opacity: 0; transform: translateX(20px); }
    to { opacity: 1; transform: translateX(0); }
}
@keyframes cw-drive-in {
    from { opacity: 0; transform: translateX(-100px); }
    to { opacity: 1; transform: translateX(0); }
}
@keyframes cw-pulse-glow {
    0% { box-shadow: 0 0 0 rgba(59, 130, 246, 0); }
    50% { box-shadow: 0 0 20px rgba(59, 130, 246, 0.5); }
    100% { box-shadow: 0 0 0 rgba(59, 130, 246, 0); }
}
@keyframes cw-spin {
    to { transform: rotate(360deg); }
}
.hover-lift:hover { transform: translateY(-5px); }
.hover-grow:hover { transform: scale(1.05); }
.hover-grow:active, .press:active { transform: scale(0.95); }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_animation_renders_full_declaration() {
        let anim = Animation::on_mount(Keyframes::FadeUp, 600).delay(300);
        assert_eq!(anim.style(false), "animation: cw-fade-up 600ms ease-out 300ms both;");
    }

    #[test]
    fn in_view_is_hidden_until_revealed() {
        let anim = Animation::in_view(Keyframes::FadeUp, 500);
        assert_eq!(anim.style(false), "opacity: 0;");
        assert!(anim.style(true).starts_with("animation: cw-fade-up 500ms"));
    }

    #[test]
    fn stagger_adds_initial_and_step_offsets() {
        let base = Animation::on_mount(Keyframes::FadeUp, 600);
        assert_eq!(base.stagger(300, 200, 0).delay_ms, 300);
        assert_eq!(base.stagger(300, 200, 3).delay_ms, 900);
        // existing delay is preserved
        assert_eq!(base.delay(800).stagger(300, 200, 1).delay_ms, 1_300);
    }

    #[test]
    fn loop_runs_forever() {
        let pulse = Animation::looping(Keyframes::PulseGlow, 2_000);
        assert_eq!(pulse.style(false), "animation: cw-pulse-glow 2000ms ease-in-out 0ms infinite;");
    }

    #[test]
    fn hover_is_a_transition() {
        let style = Animation::hover(300).easing(Easing::Spring).style(true);
        assert!(style.starts_with("transition: transform 300ms cubic-bezier"));
        assert!(!style.contains("animation"));
    }

    #[test]
    fn every_keyframe_is_defined_in_the_stylesheet() {
        for kf in [
            Keyframes::FadeIn,
            Keyframes::FadeUp,
            Keyframes::FadeDown,
            Keyframes::ScaleIn,
            Keyframes::SlideLeft,
            Keyframes::SlideRight,
            Keyframes::DriveIn,
            Keyframes::PulseGlow,
        ] {
            assert!(STYLESHEET.contains(&format!("@keyframes {} ", kf.name())), "{:?}", kf);
        }
    }
}

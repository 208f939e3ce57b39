use yew::prelude::*;

use crate::animation::{Animation, Easing, Keyframes};
use crate::content::BOOK_NOW;

const BACKGROUND: &str = "https://images.unsplash.com/photo-1520340356584-f9917d1eea6f?auto=format&fit=crop&w=2000&q=80";

// children: 300ms initial delay, 200ms apart
const STAGE: Animation = Animation::on_mount(Keyframes::FadeUp, 600);
const STAGE_DELAY_MS: u32 = 300;
const STAGE_STEP_MS: u32 = 200;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let stage = |index: usize| STAGE.stagger(STAGE_DELAY_MS, STAGE_STEP_MS, index).style(true);
    // the button trails its own stage slot by 800ms
    let button = Animation::on_mount(Keyframes::ScaleIn, 500).stagger(STAGE_DELAY_MS + 800, STAGE_STEP_MS, 2);
    let button_hover = Animation::hover(200).easing(Easing::EaseOut);

    html! {
        <section id="hero-section" class="hero" dir="rtl">
            <style>
                {r#"
                .hero {
                    position: relative;
                    width: 100%;
                    height: 90vh;
                    min-height: 600px;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                }
                .hero-background::after {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to left, rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.3));
                }
                .hero-content {
                    position: relative;
                    height: 100%;
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    text-align: right;
                }
                .hero h1 {
                    font-size: 4.5rem;
                    font-weight: bold;
                    color: #fff;
                    margin-bottom: 1rem;
                }
                .hero-subtitle {
                    font-size: 1.5rem;
                    color: rgba(255, 255, 255, 0.9);
                    margin-bottom: 2rem;
                    max-width: 32rem;
                }
                .hero-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #3b82f6;
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 0.75rem 2rem;
                    font-size: 1.125rem;
                    font-weight: 500;
                    cursor: pointer;
                }
                .hero-tagline {
                    position: absolute;
                    bottom: 2rem;
                    right: 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: flex-end;
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.875rem;
                }
                .hero-bars { display: flex; gap: 0.5rem; margin-top: 0.25rem; }
                .hero-bars span { height: 4px; border-radius: 999px; }
                @media (max-width: 767px) {
                    .hero h1 { font-size: 3rem; }
                    .hero-subtitle { font-size: 1.25rem; }
                }
                "#}
            </style>
            <div class="hero-background" style={format!("background-image: url('{}');", BACKGROUND)}></div>
            <div class="hero-content">
                <h1 style={stage(0)}>{"מכוניות"}</h1>
                <p class="hero-subtitle" style={stage(1)}>{"השירותים הטובים ביותר"}</p>
                <div style={button.style(true)}>
                    <button
                        class="hero-cta hover-grow"
                        style={button_hover.style(true)}
                        aria-label={BOOK_NOW}
                    >
                        <span aria-hidden="true">{"📅"}</span>
                        <span>{BOOK_NOW}</span>
                    </button>
                </div>
                <div class="hero-tagline" style={stage(3)}>
                    <span>{"שטיפת רכב מקצועית"}</span>
                    <div class="hero-bars">
                        <span style="width: 40px; background: #10b981;"></span>
                        <span style="width: 24px; background: #3b82f6;"></span>
                    </div>
                </div>
            </div>
        </section>
    }
}

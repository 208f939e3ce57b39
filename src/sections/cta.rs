use yew::prelude::*;

use crate::animation::{Animation, Easing, Keyframes};
use crate::content::BOOK_NOW;

const BACKGROUND: &str = "https://images.unsplash.com/photo-1520340356584-f9917d1eea6f?auto=format&fit=crop&w=1920&q=80";

const BENEFITS: &[&str] = &[
    "מחיר מיוחד לשטיפה ראשונה",
    "זמינות גבוהה - הזמנה מהירה",
    "שירות מקצועי ואדיב",
];

#[function_component(CtaSection)]
pub fn cta_section() -> Html {
    let content = Animation::on_mount(Keyframes::FadeUp, 600).style(true);
    let pulse = Animation::looping(Keyframes::PulseGlow, 2000).style(true);
    let car = Animation::on_mount(Keyframes::DriveIn, 800)
        .delay(300)
        .easing(Easing::Spring)
        .style(true);

    html! {
        <section id="car-wash-cta" class="cta" dir="rtl" aria-labelledby="cta-heading">
            <style>
                {r#"
                .cta { position: relative; width: 100%; min-height: 500px; overflow: hidden; }
                .cta-background {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    filter: brightness(0.7);
                }
                .cta-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 6rem 1rem;
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                }
                .cta-content { max-width: 32rem; text-align: right; }
                .cta-content h2 { font-size: 3rem; font-weight: bold; color: #fff; margin-bottom: 1rem; }
                .cta-content > p { font-size: 1.125rem; color: rgba(255, 255, 255, 0.9); margin-bottom: 2rem; }
                .cta-benefits {
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                    padding: 1rem;
                    border-radius: 8px;
                    border-right: 4px solid #10b981;
                    margin-bottom: 2rem;
                    list-style: none;
                }
                .cta-benefits li { color: #fff; font-weight: 500; }
                .cta-benefits li::before { content: '✓ '; color: #10b981; font-weight: bold; }
                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: #3b82f6;
                    color: #fff;
                    font-weight: bold;
                    font-size: 1.125rem;
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 8px;
                    cursor: pointer;
                    transition: background 0.3s, transform 0.2s;
                }
                .cta-button:hover { background: #2563eb; }
                .cta-car {
                    position: absolute;
                    left: 2rem;
                    bottom: 2rem;
                    font-size: 3rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                @media (max-width: 767px) {
                    .cta-inner { padding: 4rem 1rem; }
                    .cta-content h2 { font-size: 2.25rem; }
                }
                "#}
            </style>
            <div class="cta-background" style={format!("background-image: url('{}');", BACKGROUND)} role="img" aria-label="מכונית נקייה ומבריקה לאחר שטיפה"></div>

            <div class="cta-inner">
                <div class="cta-content" style={content}>
                    <h2 id="cta-heading">{"הרכב שלך ראוי לטיפול מושלם"}</h2>
                    <p>
                        {"שטיפת רכב מקצועית עם תוצאות מבריקות. אנו משתמשים בחומרים איכותיים ביותר לשמירה על צבע הרכב והברק שלו לאורך זמן."}
                    </p>
                    <ul class="cta-benefits">
                        { for BENEFITS.iter().map(|benefit| html! { <li>{*benefit}</li> }) }
                    </ul>
                    <a href="#contact-section" class="cta-button hover-grow" style={pulse} aria-label="הזמן שטיפת רכב עכשיו">
                        {BOOK_NOW}
                        <span aria-hidden="true">{"←"}</span>
                    </a>
                </div>

                <div class="cta-car" style={car} aria-hidden="true">{"🚙"}</div>
            </div>
        </section>
    }
}

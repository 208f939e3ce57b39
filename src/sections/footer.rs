use chrono::Datelike;
use yew::prelude::*;

use crate::animation::{Animation, Easing, Keyframes};
use crate::config::BUSINESS;
use crate::content::{FooterLink, OPENING_HOURS, QUICK_LINKS, SERVICE_LINKS};

const LOGO: &str = "https://images.unsplash.com/photo-1520340356584-f9917d1eea6f?auto=format&fit=crop&w=150&q=80";

// every footer row staggers its blocks the same way
const ITEM: Animation = Animation::on_mount(Keyframes::FadeUp, 500).easing(Easing::Spring);
const ITEM_DELAY_MS: u32 = 200;
const ITEM_STEP_MS: u32 = 100;

fn item_style(index: usize) -> String {
    ITEM.stagger(ITEM_DELAY_MS, ITEM_STEP_MS, index).style(true)
}

fn link_list(title: &str, links: &[FooterLink], index: usize) -> Html {
    html! {
        <div class="footer-block" style={item_style(index)}>
            <h3>{title.to_string()}</h3>
            <ul class="footer-links">
                { for links.iter().map(|link| html! {
                    <li><a href={link.href}>{link.label}</a></li>
                }) }
            </ul>
        </div>
    }
}

fn social_link(href: &'static str, label: &'static str, glyph: &'static str) -> Html {
    html! {
        <a {href} target="_blank" rel="noopener noreferrer" class="footer-social hover-grow" aria-label={label}>
            <span aria-hidden="true">{glyph}</span>
        </a>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer id="main-footer" class="footer" dir="rtl" aria-label="פוטר של שטיפת מכוניות">
            <style>
                {r#"
                .footer { background: #111827; color: #fff; width: 100%; }
                .footer-inner { max-width: 80rem; margin: 0 auto; padding: 3rem 1rem; }
                .footer-row {
                    display: grid;
                    gap: 2rem;
                    margin-bottom: 3rem;
                    padding-bottom: 3rem;
                    border-bottom: 1px solid #1f2937;
                }
                .footer-row.top { grid-template-columns: repeat(2, 1fr); }
                .footer-row.links { grid-template-columns: repeat(4, 1fr); }
                .footer-block { text-align: right; }
                .footer-block h3 { font-size: 1.125rem; font-weight: 600; margin-bottom: 1rem; }
                .footer-block p, .footer-block li { color: #9ca3af; }
                .footer-brand { display: flex; align-items: center; justify-content: flex-end; gap: 1rem; margin-bottom: 1rem; }
                .footer-brand h2 { font-size: 1.5rem; font-weight: bold; margin: 0; }
                .footer-brand p { margin: 0.25rem 0 0; }
                .footer-logo { width: 4rem; height: 4rem; border-radius: 50%; border: 2px solid #3b82f6; object-fit: cover; }
                .footer-contacts, .footer-links, .footer-hours { list-style: none; padding: 0; margin: 0; }
                .footer-contacts li { display: flex; align-items: center; justify-content: flex-end; gap: 0.5rem; margin-bottom: 0.75rem; }
                .footer-links li { margin-bottom: 0.5rem; }
                .footer-links a { color: #9ca3af; text-decoration: none; transition: color 0.3s; }
                .footer-links a:hover { color: #3b82f6; }
                .footer-hours li { display: flex; justify-content: space-between; margin-bottom: 0.5rem; }
                .footer-socials { display: flex; gap: 1rem; justify-content: flex-end; }
                .footer-social {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: #1f2937;
                    text-decoration: none;
                    transition: background 0.3s, transform 0.2s;
                }
                .footer-social:hover { background: #3b82f6; }
                .footer-copyright { text-align: center; color: #6b7280; font-size: 0.875rem; }
                @media (max-width: 1023px) {
                    .footer-row.links { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 767px) {
                    .footer-row.top, .footer-row.links { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="footer-inner">
                <div class="footer-row top">
                    <div class="footer-block" style={item_style(0)}>
                        <div class="footer-brand">
                            <div>
                                <h2>{BUSINESS.name}</h2>
                                <p>{BUSINESS.tagline}</p>
                            </div>
                            <img class="footer-logo" src={LOGO} alt="לוגו שטיפת מכוניות" />
                        </div>
                        <p>
                            {"אנו מציעים שירותי שטיפת מכוניות ברמה הגבוהה ביותר, עם דגש על פרטים ושימוש בחומרים איכותיים. "}
                            {"הצוות המקצועי שלנו מחויב לספק לכם את השירות הטוב ביותר ולהחזיר את הברק לרכב שלכם."}
                        </p>
                    </div>

                    <div class="footer-block" style={item_style(1)}>
                        <h3>{"צור קשר"}</h3>
                        <ul class="footer-contacts">
                            <li><span>{BUSINESS.address}</span><span aria-hidden="true">{"📍"}</span></li>
                            <li><span>{BUSINESS.landline}</span><span aria-hidden="true">{"📞"}</span></li>
                            <li><span>{BUSINESS.email}</span><span aria-hidden="true">{"✉️"}</span></li>
                            <li><span>{BUSINESS.whatsapp}</span><span aria-hidden="true">{"💬"}</span></li>
                        </ul>
                    </div>
                </div>

                <div class="footer-row links">
                    { link_list("ניווט מהיר", QUICK_LINKS, 0) }
                    { link_list("שירותים", SERVICE_LINKS, 1) }

                    <div class="footer-block" style={item_style(2)}>
                        <h3>{"שעות פעילות"}</h3>
                        <ul class="footer-hours">
                            { for OPENING_HOURS.iter().map(|(days, hours)| html! {
                                <li><span>{*days}</span><span>{*hours}</span></li>
                            }) }
                        </ul>
                    </div>

                    <div class="footer-block" style={item_style(3)}>
                        <h3>{"הצטרפו אלינו"}</h3>
                        <p>{"עקבו אחרינו ברשתות החברתיות לעדכונים ומבצעים"}</p>
                        <div class="footer-socials">
                            { social_link(BUSINESS.instagram_url, "עקבו אחרינו באינסטגרם", "📷") }
                            { social_link(BUSINESS.facebook_url, "עקבו אחרינו בפייסבוק", "📘") }
                            { social_link(BUSINESS.whatsapp_url, "צרו איתנו קשר בוואטסאפ", "💬") }
                        </div>
                    </div>
                </div>

                <p class="footer-copyright" style={item_style(0)}>
                    {format!("© {} {}. כל הזכויות שמורות.", year, BUSINESS.name)}
                </p>
            </div>
        </footer>
    }
}

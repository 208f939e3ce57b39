use yew::prelude::*;

use crate::animation::{Animation, Keyframes};
use crate::content::{Service, BOOK_NOW, SERVICES};
use crate::hooks::use_reveal_once;

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    index: usize,
    revealed: bool,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let Service { icon, title, description, price, image } = &SERVICES[props.index];
    let reveal = Animation::in_view(Keyframes::FadeUp, 500).stagger(0, 100, props.index);
    let hover = Animation::hover(300);

    html! {
        <div style={reveal.style(props.revealed)}>
            <div class="service-card hover-lift" style={hover.style(true)}>
                <div class="service-image">
                    <img src={*image} alt={*title} loading="lazy" />
                </div>
                <div class="service-body">
                    <div class="service-meta">
                        <span class="service-price">{*price}</span>
                        <span class="service-icon" aria-hidden="true">{icon.glyph()}</span>
                    </div>
                    <h3>{*title}</h3>
                    <p>{*description}</p>
                    <button class="service-book press">{BOOK_NOW}</button>
                </div>
            </div>
        </div>
    }
}

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let grid = use_node_ref();
    let revealed = use_reveal_once(grid.clone());

    html! {
        <section id="services-section" class="services" dir="rtl">
            <style>
                {r#"
                .services { padding: 4rem 1rem; background: #f9fafb; }
                .services-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .service-card {
                    background: #fff;
                    border-radius: 8px;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    overflow: hidden;
                    height: 100%;
                }
                .service-image { height: 12rem; }
                .service-image img { width: 100%; height: 100%; object-fit: cover; }
                .service-body { padding: 1.5rem; text-align: right; }
                .service-meta {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1rem;
                    font-size: 1.875rem;
                }
                .service-price { color: #3b82f6; }
                .service-body h3 { font-size: 1.25rem; font-weight: bold; margin-bottom: 0.5rem; }
                .service-body p { color: #4b5563; }
                .service-book {
                    margin-top: 1rem;
                    width: 100%;
                    background: #3b82f6;
                    color: #fff;
                    border: none;
                    border-radius: 6px;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                    transition: background 0.3s, transform 0.2s;
                }
                .service-book:hover { background: #2563eb; }
                @media (max-width: 1023px) {
                    .services-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 767px) {
                    .services-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="section-heading">
                <h2>{"השירותים שלנו"}</h2>
                <p>{"אנו מציעים מגוון רחב של שירותי שטיפת רכב ודיטיילינג כדי לשמור על הרכב שלך במצב מושלם"}</p>
            </div>
            <div class="services-grid" ref={grid}>
                { for (0..SERVICES.len()).map(|index| html! {
                    <ServiceCard key={index} {index} {revealed} />
                }) }
            </div>
        </section>
    }
}

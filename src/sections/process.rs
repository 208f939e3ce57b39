use yew::prelude::*;

use crate::animation::{Animation, Keyframes};
use crate::content::PROCESS_STEPS;
use crate::hooks::use_reveal_once;

#[function_component(ProcessSection)]
pub fn process_section() -> Html {
    let grid = use_node_ref();
    let closing = use_node_ref();
    let grid_revealed = use_reveal_once(grid.clone());
    let closing_revealed = use_reveal_once(closing.clone());

    let heading = Animation::on_mount(Keyframes::FadeDown, 500).style(true);
    let intro = Animation::on_mount(Keyframes::FadeIn, 500).delay(200).style(true);
    let step = Animation::in_view(Keyframes::FadeUp, 500);
    let hover = Animation::hover(200);

    html! {
        <section id="car-wash-process" class="process" dir="rtl">
            <style>
                {r#"
                .process { padding: 4rem 1rem; background: #f9fafb; }
                .process-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .process-card {
                    background: #fff;
                    border-radius: 8px;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    overflow: hidden;
                }
                .process-image { position: relative; height: 12rem; }
                .process-image img { width: 100%; height: 100%; object-fit: cover; }
                .process-image-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: flex-end;
                    justify-content: flex-start;
                    padding: 1rem;
                    color: #fff;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
                }
                .process-title { display: flex; align-items: center; gap: 0.5rem; }
                .process-title h3 { font-size: 1.25rem; font-weight: bold; }
                .process-number {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: #10b981;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .process-body {
                    padding: 1.25rem;
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                }
                .process-body p { flex: 1; color: #374151; text-align: right; }
                .process-icon { font-size: 1.5rem; }
                .process-cta { margin-top: 4rem; text-align: center; }
                .process-cta-button {
                    position: relative;
                    display: inline-block;
                    overflow: hidden;
                    border-radius: 8px;
                    background: #3b82f6;
                    color: #fff;
                    padding: 0.75rem 2rem;
                    font-size: 1.125rem;
                    font-weight: 500;
                    cursor: pointer;
                    z-index: 0;
                }
                .process-cta-button::before {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: #10b981;
                    transform: translateX(-100%);
                    transition: transform 0.3s;
                    z-index: -1;
                }
                .process-cta-button:hover::before { transform: translateX(0); }
                @media (max-width: 1023px) {
                    .process-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 767px) {
                    .process-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="section-heading">
                <h2 style={heading}>{"תהליך השטיפה שלנו"}</h2>
                <p style={intro}>
                    {"אנו מקפידים על תהליך שטיפה מקצועי בשישה שלבים להבטיח שהרכב שלך יהיה נקי ומבריק"}
                </p>
            </div>

            <div class="process-grid" ref={grid}>
                { for PROCESS_STEPS.iter().enumerate().map(|(index, item)| html! {
                    <div key={item.id} style={step.stagger(0, 200, index).style(grid_revealed)}>
                        <div class="process-card hover-lift" style={hover.style(true)}>
                            <div class="process-image">
                                <img src={item.image} alt={item.title} loading="lazy" />
                                <div class="process-image-overlay">
                                    <div class="process-title">
                                        <h3>{item.title}</h3>
                                        <span class="process-number">{item.id}</span>
                                    </div>
                                </div>
                            </div>
                            <div class="process-body">
                                <p>{item.description}</p>
                                <span class="process-icon" aria-hidden="true">{item.icon.glyph()}</span>
                            </div>
                        </div>
                    </div>
                }) }
            </div>

            <div
                class="process-cta"
                ref={closing}
                style={Animation::in_view(Keyframes::FadeIn, 500).style(closing_revealed)}
            >
                <span class="process-cta-button hover-grow">{"הזמן שטיפה עכשיו"}</span>
            </div>
        </section>
    }
}

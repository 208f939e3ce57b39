use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{FaqItem, FAQ_ITEMS};
use crate::state::accordion::Accordion;

const CONTACT_IMAGE: &str = "https://images.unsplash.com/photo-1520340356584-f9917d1eea6f?auto=format&fit=crop&w=800&q=80";

#[derive(Properties, PartialEq)]
struct FaqEntryProps {
    id: u32,
    expanded: bool,
    on_toggle: Callback<u32>,
}

#[function_component(FaqEntry)]
fn faq_entry(props: &FaqEntryProps) -> Html {
    let Some(FaqItem { id, question, answer }) = FAQ_ITEMS.iter().find(|item| item.id == props.id) else {
        return html! {};
    };

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = *id;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id);
        })
    };

    // The panel is always rendered; the grid-row transition interpolates its
    // height, so a click mid-transition simply retargets it.
    html! {
        <div class={classes!("faq-item", props.expanded.then(|| "open"))}>
            <button
                class="faq-question"
                onclick={toggle}
                aria-expanded={props.expanded.to_string()}
                aria-controls={format!("faq-answer-{}", id)}
            >
                <h3>{*question}</h3>
                <span class="faq-chevron" aria-hidden="true">{"⌄"}</span>
            </button>
            <div id={format!("faq-answer-{}", id)} class="faq-answer" aria-hidden={(!props.expanded).to_string()}>
                <div class="faq-answer-inner">
                    <p>{*answer}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let accordion = use_reducer(Accordion::default);

    let on_toggle = {
        let accordion = accordion.clone();
        Callback::from(move |id: u32| accordion.dispatch(id))
    };

    html! {
        <section id="faq-section" class="faq" dir="rtl">
            <style>
                {r#"
                .faq { padding: 4rem 1rem; background: #f9fafb; }
                .faq-inner { max-width: 56rem; margin: 0 auto; }
                .faq-list { display: flex; flex-direction: column; gap: 1rem; }
                .faq-item {
                    background: #fff;
                    border-radius: 8px;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    padding: 1.25rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    text-align: right;
                    cursor: pointer;
                }
                .faq-question h3 { font-size: 1.125rem; font-weight: 500; color: #1f2937; margin: 0; }
                .faq-chevron {
                    color: #2563eb;
                    font-size: 1.25rem;
                    transition: transform 0.3s;
                }
                .faq-item.open .faq-chevron { transform: rotate(180deg); }
                .faq-answer {
                    display: grid;
                    grid-template-rows: 0fr;
                    opacity: 0;
                    transition: grid-template-rows 0.3s ease-in-out, opacity 0.3s ease-in-out;
                }
                .faq-item.open .faq-answer { grid-template-rows: 1fr; opacity: 1; }
                .faq-answer-inner { overflow: hidden; }
                .faq-answer-inner p {
                    margin: 0;
                    padding: 0 1.25rem 1.25rem;
                    border-top: 1px solid #f3f4f6;
                    color: #4b5563;
                    text-align: right;
                }
                .faq-more {
                    margin-top: 3rem;
                    background: #fff;
                    border-radius: 8px;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    padding: 1.5rem;
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .faq-more img { width: 33%; border-radius: 8px; object-fit: cover; }
                .faq-more-text { flex: 1; text-align: right; }
                .faq-more-text h3 { font-size: 1.25rem; font-weight: bold; color: #1f2937; margin-bottom: 0.5rem; }
                .faq-more-text p { color: #4b5563; margin-bottom: 1rem; }
                .faq-more-text a {
                    display: inline-block;
                    background: #3b82f6;
                    color: #fff;
                    padding: 0.5rem 1.5rem;
                    border-radius: 6px;
                    text-decoration: none;
                    transition: background 0.3s;
                }
                .faq-more-text a:hover { background: #2563eb; }
                @media (max-width: 767px) {
                    .faq-more { flex-direction: column; }
                    .faq-more img { width: 100%; }
                }
                "#}
            </style>
            <div class="faq-inner">
                <div class="section-heading">
                    <h2>{"שאלות נפוצות"}</h2>
                    <p>{"התשובות לשאלות הנפוצות ביותר על שירותי שטיפת הרכב שלנו"}</p>
                </div>

                <div class="faq-list">
                    { for FAQ_ITEMS.iter().map(|item| html! {
                        <FaqEntry
                            key={item.id}
                            id={item.id}
                            expanded={accordion.is_expanded(item.id)}
                            on_toggle={on_toggle.clone()}
                        />
                    }) }
                </div>

                <div class="faq-more">
                    <img src={CONTACT_IMAGE} alt="שטיפת רכב" loading="lazy" />
                    <div class="faq-more-text">
                        <h3>{"יש לך שאלה שלא מופיעה כאן?"}</h3>
                        <p>{"צוות שירות הלקוחות שלנו זמין לענות על כל שאלה נוספת שיש לך."}</p>
                        <a href="#contact-section">{"צור קשר"}</a>
                    </div>
                </div>
            </div>
        </section>
    }
}

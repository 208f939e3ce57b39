use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::{Animation, Keyframes};
use crate::content::GALLERY_ITEMS;
use crate::state::lightbox::{Lightbox, LightboxAction};

const BEFORE: &str = "לפני";
const AFTER: &str = "אחרי";

#[function_component(GallerySection)]
pub fn gallery_section() -> Html {
    let lightbox = use_reducer(Lightbox::default);

    let close = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| lightbox.dispatch(LightboxAction::Close))
    };

    let toggle = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| lightbox.dispatch(LightboxAction::Toggle))
    };

    // clicks inside the content must not reach the backdrop's close handler
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let card = Animation::on_mount(Keyframes::FadeUp, 500);
    let hover = Animation::hover(300);

    let overlay = lightbox.selected().and_then(|index| GALLERY_ITEMS.get(index)).map(|item| {
        let after = lightbox.showing_after();
        let src = if after { item.after_image } else { item.before_image };
        html! {
            <div class="lightbox" onclick={close.clone()} style={Animation::on_mount(Keyframes::FadeIn, 300).style(true)}>
                <div class="lightbox-content" onclick={keep_open.clone()}>
                    <div class="lightbox-image">
                        <img {src} alt={item.caption} />
                        <span class="lightbox-label">{if after { AFTER } else { BEFORE }}</span>
                    </div>
                    <button class="lightbox-close" onclick={close.clone()} aria-label="סגור">{"✕"}</button>
                    <button class="lightbox-toggle" onclick={toggle.clone()}>
                        {if after { "הצג לפני" } else { "הצג אחרי" }}
                    </button>
                    <div class="lightbox-caption"><p>{item.caption}</p></div>
                </div>
            </div>
        }
    });

    html! {
        <section id="car-wash-gallery" class="gallery" dir="rtl">
            <style>
                {r#"
                .gallery { padding: 4rem 1rem; background: #f9fafb; }
                .gallery-inner { max-width: 1152px; margin: 0 auto; }
                .gallery-heading { text-align: right; margin-bottom: 3rem; }
                .gallery-heading h2 { font-size: 2.25rem; font-weight: bold; color: #1f2937; margin-bottom: 1rem; }
                .gallery-heading p { font-size: 1.125rem; color: #4b5563; max-width: 42rem; }
                .gallery-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; }
                .gallery-card {
                    background: #fff;
                    border-radius: 8px;
                    overflow: hidden;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .gallery-card:hover { box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15); }
                .gallery-pair { position: relative; height: 20rem; display: flex; cursor: pointer; }
                .gallery-half { position: relative; width: 50%; height: 100%; overflow: hidden; }
                .gallery-half img { width: 100%; height: 100%; object-fit: cover; }
                .gallery-badge {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.5rem;
                    color: #fff;
                    padding: 0.25rem 0.5rem;
                    font-size: 0.875rem;
                    border-radius: 4px;
                }
                .gallery-badge.before { background: rgba(17, 24, 39, 0.75); }
                .gallery-badge.after { background: #10b981; }
                .gallery-expand {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(59, 130, 246, 0);
                    transition: background 0.3s;
                }
                .gallery-expand span {
                    opacity: 0;
                    background: #fff;
                    border-radius: 50%;
                    padding: 0.5rem;
                    transition: opacity 0.3s;
                }
                .gallery-pair:hover .gallery-expand { background: rgba(59, 130, 246, 0.2); }
                .gallery-pair:hover .gallery-expand span { opacity: 1; }
                .gallery-caption { padding: 1rem; text-align: right; font-size: 1.125rem; font-weight: 600; color: #1f2937; }
                .lightbox {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    background: rgba(0, 0, 0, 0.9);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .lightbox-content {
                    position: relative;
                    width: 100%;
                    max-width: 64rem;
                    max-height: 90vh;
                    background: #fff;
                    border-radius: 8px;
                    overflow: hidden;
                }
                .lightbox-image { position: relative; height: 80vh; }
                .lightbox-image img { width: 100%; height: 100%; object-fit: contain; }
                .lightbox-label {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: rgba(17, 24, 39, 0.75);
                    color: #fff;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    font-size: 0.875rem;
                }
                .lightbox-close {
                    position: absolute;
                    top: 0.5rem;
                    left: 0.5rem;
                    background: #fff;
                    border: none;
                    border-radius: 50%;
                    width: 2.5rem;
                    height: 2.5rem;
                    font-size: 1.25rem;
                    cursor: pointer;
                }
                .lightbox-close:hover { background: #e5e7eb; }
                .lightbox-toggle {
                    position: absolute;
                    bottom: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #3b82f6;
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 0.5rem 1.5rem;
                    cursor: pointer;
                }
                .lightbox-toggle:hover { background: #2563eb; }
                .lightbox-caption {
                    position: absolute;
                    bottom: 1rem;
                    right: 1rem;
                    background: rgba(0, 0, 0, 0.75);
                    color: #fff;
                    padding: 0.5rem 1rem;
                    border-radius: 4px;
                }
                @media (max-width: 767px) {
                    .gallery-grid { grid-template-columns: 1fr; }
                    .gallery-pair { height: 16rem; }
                }
                "#}
            </style>
            <div class="gallery-inner">
                <div class="gallery-heading">
                    <h2>{"התוצאות מדברות בעד עצמן"}</h2>
                    <p>{"הצצה לתהליך הניקוי המקצועי שלנו. לחצו על תמונה כדי לראות את ההבדל המדהים בין לפני ואחרי."}</p>
                </div>

                <div class="gallery-grid">
                    { for GALLERY_ITEMS.iter().enumerate().map(|(index, item)| {
                        let open = {
                            let lightbox = lightbox.clone();
                            Callback::from(move |_: MouseEvent| lightbox.dispatch(LightboxAction::Open(index)))
                        };
                        html! {
                            <div key={item.id} style={card.style(true)}>
                                <div class="gallery-card hover-lift" style={hover.style(true)}>
                                    <div class="gallery-pair" onclick={open}>
                                        <div class="gallery-half">
                                            <img src={item.before_image} alt={format!("{} - {}", BEFORE, item.caption)} />
                                            <span class="gallery-badge before">{BEFORE}</span>
                                        </div>
                                        <div class="gallery-half">
                                            <img src={item.after_image} alt={format!("{} - {}", AFTER, item.caption)} />
                                            <span class="gallery-badge after">{AFTER}</span>
                                        </div>
                                        <div class="gallery-expand"><span aria-hidden="true">{"⤢"}</span></div>
                                    </div>
                                    <h3 class="gallery-caption">{item.caption}</h3>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>

            { for overlay }
        </section>
    }
}

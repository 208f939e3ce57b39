use gloo_timers::callback::Interval;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::animation::{Animation, Easing, Keyframes};
use crate::config::AUTOPLAY_INTERVAL_MS;
use crate::content::{Testimonial, TESTIMONIALS};
use crate::state::carousel::{page_size_for_width, Carousel, CarouselAction};

fn render_stars(rating: u8) -> Html {
    let rating = rating.min(5);
    html! {
        <div class="stars" aria-label={format!("דירוג {} מתוך 5 כוכבים", rating)}>
            { for (0..5u8).map(|i| html! {
                <span class={classes!("star", (i < rating).then(|| "filled"))} aria-hidden="true">{"★"}</span>
            }) }
        </div>
    }
}

fn render_card(testimonial: &Testimonial, per_view: usize) -> Html {
    let hover = Animation::hover(300).easing(Easing::Spring);
    html! {
        <div key={testimonial.id} class="testimonial-slot" style={format!("width: {}%;", 100 / per_view)}>
            <div class="testimonial-card hover-lift" style={hover.style(true)}>
                <div class="testimonial-header">
                    <img class="testimonial-avatar" src={testimonial.image} alt={testimonial.name} />
                    <div class="testimonial-who">
                        <h3>{testimonial.name}</h3>
                        { render_stars(testimonial.rating) }
                    </div>
                </div>
                <blockquote>
                    <p>{format!("\"{}\"", testimonial.quote)}</p>
                </blockquote>
            </div>
        </div>
    }
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let (width, _) = use_window_size();
    let per_view = page_size_for_width(width);
    let carousel = use_reducer(|| Carousel::new(TESTIMONIALS.len(), per_view));

    // width is re-sampled on every resize; only a page size change touches the carousel
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |per_view: &usize| {
                dispatcher.dispatch(CarouselAction::Resize(*per_view));
                || ()
            },
            per_view,
        );
    }

    // restarted on every move so manual navigation gets a full interval too
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |(autoplaying, _): &(bool, usize)| {
                let interval = autoplaying.then(|| {
                    Interval::new(AUTOPLAY_INTERVAL_MS, move || dispatcher.dispatch(CarouselAction::Next))
                });
                move || drop(interval)
            },
            (carousel.is_autoplaying(), carousel.index()),
        );
    }

    let on_enter = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Hover(true)))
    };
    let on_leave = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Hover(false)))
    };
    // keyboard users pause autoplay by focusing any control inside the carousel
    let on_focus_in = {
        let carousel = carousel.clone();
        Callback::from(move |_: FocusEvent| carousel.dispatch(CarouselAction::Focus(true)))
    };
    let on_focus_out = {
        let carousel = carousel.clone();
        Callback::from(move |_: FocusEvent| carousel.dispatch(CarouselAction::Focus(false)))
    };
    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Prev))
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };

    let page = Animation::on_mount(Keyframes::FadeIn, 500).easing(Easing::EaseInOut);

    html! {
        <section
            id="testimonials-section"
            class="testimonials"
            dir="rtl"
            onmouseenter={on_enter}
            onmouseleave={on_leave}
            onfocusin={on_focus_in}
            onfocusout={on_focus_out}
            aria-labelledby="testimonials-heading"
        >
            <style>
                {r#"
                .testimonials { padding: 4rem 1rem; background: #f9fafb; }
                .testimonials-inner { max-width: 1200px; margin: 0 auto; position: relative; }
                .heading-bar { width: 6rem; height: 4px; background: #3b82f6; margin: 0 auto; }
                .carousel-nav {
                    position: absolute;
                    top: 50%;
                    z-index: 10;
                    transform: translateY(-50%);
                    background: #fff;
                    border: none;
                    border-radius: 50%;
                    width: 3rem;
                    height: 3rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    color: #3b82f6;
                    font-size: 1.25rem;
                    cursor: pointer;
                    transition: background 0.3s, color 0.3s;
                }
                .carousel-nav:hover { background: #3b82f6; color: #fff; }
                .carousel-nav.prev { right: -1rem; }
                .carousel-nav.next { left: -1rem; }
                .carousel-window { overflow: hidden; padding: 0 3rem; }
                .carousel-page { display: flex; }
                .testimonial-slot { padding: 0 1rem; margin-bottom: 2rem; box-sizing: border-box; }
                .testimonial-card {
                    background: #fff;
                    border-radius: 8px;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    padding: 1.5rem;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                }
                .testimonial-header { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; }
                .testimonial-avatar { width: 4rem; height: 4rem; border-radius: 50%; object-fit: cover; }
                .testimonial-who { text-align: right; }
                .testimonial-who h3 { font-size: 1.125rem; font-weight: bold; color: #1f2937; }
                .stars { display: flex; margin-top: 0.25rem; }
                .star { color: #d1d5db; }
                .star.filled { color: #10b981; }
                .testimonial-card blockquote { color: #4b5563; text-align: right; flex-grow: 1; margin: 0; }
                .carousel-dots { display: flex; justify-content: center; margin-top: 2rem; }
                .carousel-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    margin: 0 0.25rem;
                    border: none;
                    border-radius: 50%;
                    background: #d1d5db;
                    cursor: pointer;
                }
                .carousel-dot.active { background: #3b82f6; }
                @media (max-width: 767px) {
                    .carousel-window { padding: 0 1rem; }
                }
                "#}
            </style>
            <div class="section-heading">
                <h2 id="testimonials-heading">{"מה הלקוחות שלנו אומרים"}</h2>
                <div class="heading-bar"></div>
            </div>

            <div class="testimonials-inner">
                <button class="carousel-nav prev" onclick={prev} aria-label="הקודם">{"›"}</button>
                <button class="carousel-nav next" onclick={next} aria-label="הבא">{"‹"}</button>

                <div class="carousel-window">
                    // keyed by index so each page remounts and replays its fade
                    <div key={carousel.index()} class="carousel-page" style={page.style(true)}>
                        { for TESTIMONIALS[carousel.visible()].iter().map(|t| render_card(t, carousel.per_view())) }
                    </div>
                </div>

                <div class="carousel-dots">
                    { for (0..carousel.page_count()).map(|index| {
                        let active = carousel.index() == index;
                        let go_to = {
                            let carousel = carousel.clone();
                            Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::GoTo(index)))
                        };
                        html! {
                            <button
                                key={index}
                                class={classes!("carousel-dot", active.then(|| "active"))}
                                onclick={go_to}
                                aria-label={format!("עבור לעדות {}", index + 1)}
                                aria-current={active.to_string()}
                            />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

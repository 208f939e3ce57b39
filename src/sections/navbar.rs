use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::{Animation, Keyframes};
use crate::content::{BOOK_NOW, NAV_ITEMS};
use crate::hooks::{scroll_offset, WindowListener};
use crate::state::navbar::{NavAction, NavState};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let nav = use_reducer(NavState::default);

    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                dispatcher.dispatch(NavAction::Scroll(scroll_offset()));
                let listener = WindowListener::new(&["scroll"], move || {
                    dispatcher.dispatch(NavAction::Scroll(scroll_offset()));
                });
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::ToggleMenu);
        })
    };

    let close_menu = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::CloseMenu))
    };

    let logo_style = Animation::on_mount(Keyframes::FadeIn, 500).style(true);
    let menu_style = Animation::on_mount(Keyframes::FadeDown, 300).style(true);

    html! {
        <header id="main-navbar" dir="rtl" class={classes!("top-nav", nav.scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1rem 0;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: #fff;
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
                    padding: 0.5rem 0;
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: bold;
                    color: #1f2937;
                    text-decoration: none;
                }
                .nav-logo span { color: #3b82f6; }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: #374151;
                    font-weight: 500;
                    text-decoration: none;
                    transition: color 0.3s, transform 0.2s;
                    display: inline-block;
                }
                .nav-link:hover { color: #3b82f6; transform: translateY(-2px); }
                .nav-book {
                    background: #3b82f6;
                    color: #fff;
                    border: none;
                    border-radius: 6px;
                    padding: 0.5rem 1.5rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: background 0.3s, transform 0.2s;
                }
                .nav-book:hover { background: #2563eb; }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    color: #374151;
                    cursor: pointer;
                }
                .mobile-menu {
                    background: #fff;
                    box-shadow: 0 8px 16px rgba(0, 0, 0, 0.1);
                    padding: 1rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .mobile-menu .nav-link {
                    padding: 0.5rem 0;
                    border-bottom: 1px solid #f3f4f6;
                }
                @media (max-width: 767px) {
                    .nav-links { display: none; }
                    .burger-menu { display: block; }
                }
                @media (min-width: 768px) {
                    .mobile-menu { display: none; }
                }
                "#}
            </style>
            <nav class="nav-content">
                <a href="#hero-section" class="nav-logo" style={logo_style}>
                    <span>{"Car"}</span>{" Wash"}
                </a>

                <div class="nav-links">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a key={item.id} href={item.href} class="nav-link" onclick={close_menu.clone()}>
                            {item.label}
                        </a>
                    }) }
                    <button class="nav-book hover-grow">{BOOK_NOW}</button>
                </div>

                <button
                    class="burger-menu press"
                    onclick={toggle_menu}
                    aria-label={if nav.menu_open { "סגור תפריט" } else { "פתח תפריט" }}
                    aria-expanded={nav.menu_open.to_string()}
                    aria-controls="mobile-menu"
                >
                    {if nav.menu_open { "✕" } else { "☰" }}
                </button>
            </nav>

            if nav.menu_open {
                <div id="mobile-menu" class="mobile-menu" style={menu_style}>
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a key={item.id} href={item.href} class="nav-link" onclick={close_menu.clone()}>
                            {item.label}
                        </a>
                    }) }
                    <button class="nav-book">{BOOK_NOW}</button>
                </div>
            }
        </header>
    }
}

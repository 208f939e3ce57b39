use log::{info, Level};
use yew::prelude::*;

mod animation;
mod api;
mod config;
mod content;
mod hooks;
mod state {
    pub mod accordion;
    pub mod carousel;
    pub mod contact_form;
    pub mod lightbox;
    pub mod navbar;
}
mod sections {
    pub mod contact;
    pub mod cta;
    pub mod faq;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod navbar;
    pub mod process;
    pub mod services;
    pub mod testimonials;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <Home />
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting carwash site");
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;

use crate::animation::STYLESHEET;
use crate::sections::{
    contact::ContactSection,
    cta::CtaSection,
    faq::FaqSection,
    footer::Footer,
    gallery::GallerySection,
    hero::HeroSection,
    navbar::Navbar,
    process::ProcessSection,
    services::ServicesSection,
    testimonials::TestimonialsSection,
};

const BASE_STYLES: &str = r#"
html { scroll-behavior: smooth; }
body {
    margin: 0;
    font-family: 'Heebo', 'Segoe UI', Arial, sans-serif;
    color: #1f2937;
    background: #fff;
}
*, *::before, *::after { box-sizing: border-box; }
img { display: block; max-width: 100%; }
.section-heading { text-align: center; margin-bottom: 3rem; }
.section-heading h2 {
    font-size: 1.875rem;
    font-weight: bold;
    color: #1f2937;
    margin-bottom: 1rem;
}
.section-heading p { color: #4b5563; max-width: 42rem; margin: 0 auto; }
@media (prefers-reduced-motion: reduce) {
    *, *::before, *::after {
        animation-duration: 1ms !important;
        animation-iteration-count: 1 !important;
        transition-duration: 1ms !important;
    }
}
"#;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="page" dir="rtl">
            <style>{STYLESHEET}</style>
            <style>{BASE_STYLES}</style>
            <Navbar />
            <main>
                <HeroSection />
                <ServicesSection />
                <ProcessSection />
                <GallerySection />
                <TestimonialsSection />
                <FaqSection />
                <ContactSection />
                <CtaSection />
            </main>
            <Footer />
        </div>
    }
}

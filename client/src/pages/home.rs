//! Landing page: the full marketing assembly.

use leptos::prelude::*;

use crate::components::call_to_action::CallToAction;
use crate::components::faq::Faq;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::how_it_works::HowItWorks;
use crate::components::testimonials::Testimonials;
use crate::components::use_cases::UseCases;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Header/>
            <main>
                <Hero/>
                <Features/>
                <HowItWorks/>
                <UseCases/>
                <Testimonials/>
                <Faq/>
                <CallToAction/>
            </main>
            <Footer/>
        </div>
    }
}

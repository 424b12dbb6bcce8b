//! The single portfolio page.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact_section::ContactSection;
use crate::components::hero::Hero;
use crate::components::projects::Projects;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <main class="portfolio">
            <Hero/>
            <About/>
            <Projects/>
            <ContactSection/>
        </main>
    }
}

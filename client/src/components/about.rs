//! About section: bio and skills grid.

use leptos::prelude::*;

use crate::util::content::{ABOUT_PARAGRAPHS, SKILLS, Section};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.anchor() class="about">
            <h2>"About Me"</h2>
            <div class="about__card">
                {ABOUT_PARAGRAPHS.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
            </div>
            <h3>"My Skills"</h3>
            <div class="about__skills">
                {SKILLS.into_iter().map(|skill| view! { <div class="about__skill">{skill}</div> }).collect_view()}
            </div>
        </section>
    }
}

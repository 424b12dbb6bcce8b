//! Project showcase cards.

use leptos::prelude::*;

use crate::util::content::{PROJECTS, Project, Section};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.anchor() class="projects">
            <h2>"Projects"</h2>
            <div class="projects__grid">
                {PROJECTS.into_iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="project-card">
            <h3 class="project-card__title">{project.title}</h3>
            <p class="project-card__description">{project.description}</p>
            <div class="project-card__tags">
                {project
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="project-card__tag">{*tag}</span> })
                    .collect_view()}
            </div>
            <div class="project-card__links">
                <a href=project.live_href>"View Project"</a>
                <a href=project.source_href>"Source"</a>
            </div>
        </article>
    }
}

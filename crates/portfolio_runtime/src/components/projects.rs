use super::*;

use crate::content::{carousel_next, carousel_previous, featured_projects, other_projects};

#[component]
pub(super) fn ProjectsSection() -> impl IntoView {
    let featured = featured_projects();
    let featured_len = featured.len();
    let featured = store_value(featured);
    let slide = create_rw_signal(0usize);
    let current = move || featured.with_value(|projects| projects.get(slide.get()).copied());

    view! {
        <section id="projects" class="projects">
            <SectionHeading index="03." title="Some Things I've Built" />
            <div class="project-carousel">
                <button
                    class="carousel-control"
                    aria-label="Previous project"
                    on:click=move |_| slide.update(|index| *index = carousel_previous(*index, featured_len))
                >
                    "‹"
                </button>
                {move || current().map(featured_card)}
                <button
                    class="carousel-control"
                    aria-label="Next project"
                    on:click=move |_| slide.update(|index| *index = carousel_next(*index, featured_len))
                >
                    "›"
                </button>
            </div>
            <div class="carousel-dots">
                {(0..featured_len)
                    .map(|index| {
                        view! {
                            <button
                                class="carousel-dot"
                                class:carousel-dot-active=move || slide.get() == index
                                aria-label=format!("Show project {}", index + 1)
                                on:click=move |_| slide.set(index)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
            <h3 class="projects-other-heading">"Other Noteworthy Projects"</h3>
            <div class="project-grid">
                {other_projects().into_iter().map(project_card).collect_view()}
            </div>
        </section>
    }
}

fn featured_card(project: &'static Project) -> impl IntoView {
    view! {
        <article class="project-featured">
            <img src=asset(project.image_path) alt=project.title />
            <div class="project-featured-body">
                <p class="project-label">"Featured Project"</p>
                <h3>
                    <a href=format!("/projects/{}", project.id)>{project.title}</a>
                </h3>
                <p>{project.description}</p>
                <TechTags stack=project.tech_stack />
                <ProjectLinks project=project />
            </div>
        </article>
    }
}

fn project_card(project: &'static Project) -> impl IntoView {
    view! {
        <article class="project-card">
            <img src=asset(project.image_path) alt=project.title loading="lazy" />
            <h4>{project.title}</h4>
            <p>{project.description}</p>
            <TechTags stack=project.tech_stack />
            <ProjectLinks project=project />
        </article>
    }
}

#[component]
fn ProjectLinks(project: &'static Project) -> impl IntoView {
    view! {
        <p class="project-links">
            <a href=project.repo_url target="_blank" rel="noopener noreferrer">
                "GitHub"
            </a>
            {project
                .demo_url
                .map(|demo| {
                    view! {
                        <a href=demo target="_blank" rel="noopener noreferrer">
                            "Live"
                        </a>
                    }
                })}
        </p>
    }
}

//! Portfolio page UI composition.

mod contact_form;
mod experience;
mod footer;
mod hero;
mod music_player;
mod navbar;
mod projects;
mod stack;

use leptos::*;

use self::{
    contact_form::ContactSection, experience::ExperienceSection, footer::Footer, hero::Hero,
    navbar::Navbar, projects::ProjectsSection, stack::StackSection,
};

use crate::{
    config::ProfileLink,
    content::{self, Project},
    runtime_context::use_portfolio_runtime,
};

/// Resolves a static asset path through the runtime host.
fn asset(path: &str) -> String {
    use_portfolio_runtime().host.get_value().asset_path(path)
}

fn link_opens_new_tab(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

#[component]
fn SocialLinks(links: Vec<ProfileLink>, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <ul class=class>
            {links
                .into_iter()
                .map(|link| {
                    let external = link_opens_new_tab(&link.href);
                    view! {
                        <li>
                            <a
                                href=link.href
                                aria-label=link.label.clone()
                                target=external.then_some("_blank")
                                rel=external.then_some("noopener noreferrer")
                            >
                                {link.label}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn SectionHeading(index: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <header class="section-heading">
            <span class="section-index">{index}</span>
            <h2>{title}</h2>
        </header>
    }
}

#[component]
fn TechTags(stack: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="tech-tags">
            {stack.iter().map(|tech| view! { <li>{*tech}</li> }).collect_view()}
        </ul>
    }
}

#[component]
/// Full single-page portfolio.
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <Navbar />
        <Hero />
        <ExperienceSection />
        <ProjectsSection />
        <StackSection />
        <ContactSection />
        <Footer />
    }
}

#[component]
/// Standalone page for one project, or a not-found notice for an unknown slug.
pub fn ProjectDetail(#[prop(into)] slug: Signal<String>) -> impl IntoView {
    let project = move || slug.with(|slug| content::find_project(slug));

    view! {
        <section class="canonical-content canonical-project">
            {move || match project() {
                Some(project) => project_detail_view(project).into_view(),
                None => {
                    view! {
                        <h1>"Project not found"</h1>
                        <p>{move || format!("No project is published under \"{}\".", slug.get())}</p>
                        <a href="/#projects">"Back to projects"</a>
                    }
                        .into_view()
                }
            }}
        </section>
    }
}

fn project_detail_view(project: &'static Project) -> impl IntoView {
    view! {
        <h1>{project.title}</h1>
        <img class="project-detail-image" src=asset(project.image_path) alt=project.title />
        <p>{project.description}</p>
        <TechTags stack=project.tech_stack />
        <p class="project-links">
            <a href=project.repo_url target="_blank" rel="noopener noreferrer">
                "Source"
            </a>
            {project
                .demo_url
                .map(|demo| {
                    view! {
                        <a href=demo target="_blank" rel="noopener noreferrer">
                            "Live demo"
                        </a>
                    }
                })}
        </p>
        <a href="/#projects">"Back to projects"</a>
    }
}

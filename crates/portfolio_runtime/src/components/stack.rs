use super::*;

use crate::content::SKILLS;

#[component]
pub(super) fn StackSection() -> impl IntoView {
    view! {
        <section id="skills" class="skills">
            <SectionHeading index="04." title="My Stack" />
            <div class="skill-categories">
                {SKILLS
                    .iter()
                    .map(|category| {
                        view! {
                            <div class="skill-category">
                                <h3>{category.title}</h3>
                                <ul>
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <li
                                                    class="skill-badge"
                                                    style:border-color=skill.color
                                                >
                                                    {skill.name}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

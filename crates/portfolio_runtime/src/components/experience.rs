use super::*;

use crate::content::{ExperienceEntry, EXPERIENCE};

#[component]
pub(super) fn ExperienceSection() -> impl IntoView {
    let selected = create_rw_signal(EXPERIENCE.first().map(|entry| entry.id).unwrap_or_default());
    let active = move || content::find_experience(&selected.get()).or(EXPERIENCE.first());

    view! {
        <section id="experience" class="experience">
            <SectionHeading index="02." title="Where I've Worked" />
            <div class="experience-layout">
                <div class="experience-tabs" role="tablist">
                    {EXPERIENCE
                        .iter()
                        .map(|entry| {
                            let id = entry.id;
                            view! {
                                <button
                                    role="tab"
                                    class="experience-tab"
                                    class:experience-tab-active=move || selected.get() == id
                                    aria-selected=move || (selected.get() == id).to_string()
                                    on:click=move |_| selected.set(id)
                                >
                                    <span class="tab-label-full">{entry.tab_label(false)}</span>
                                    <span class="tab-label-short">{entry.tab_label(true)}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="experience-panel" role="tabpanel">
                    {move || active().map(experience_panel)}
                </div>
            </div>
        </section>
    }
}

fn experience_panel(entry: &'static ExperienceEntry) -> impl IntoView {
    view! {
        <h3>
            {entry.role} <span class="experience-company">" @ " {entry.company}</span>
        </h3>
        <p class="experience-meta">{entry.period} " · " {entry.location}</p>
        <ul class="experience-highlights">
            {entry.highlights.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
        </ul>
    }
}

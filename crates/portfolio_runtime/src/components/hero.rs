use super::*;

use crate::reveal::use_typed_reveal;

use super::music_player::MusicPlayer;

#[component]
pub(super) fn Hero() -> impl IntoView {
    let runtime = use_portfolio_runtime();
    let host = runtime.host.get_value();
    let config = host.config();
    let profile = &config.profile;

    let greeting = Signal::derive(move || config.profile.greeting.clone());
    let typed = use_typed_reveal(host.timers(), greeting, config.reveal());
    let show_contacts = create_rw_signal(false);

    view! {
        <section id="home" class="hero">
            <div class="hero-text">
                <h1 class="hero-greeting" aria-label=profile.greeting.clone()>
                    <span>{move || typed.get()}</span>
                    <span class="hero-caret" aria-hidden="true">
                        "|"
                    </span>
                </h1>
                <h2 class="hero-headline">{profile.headline.clone()}</h2>
                <p class="hero-description">{profile.description.clone()}</p>
                <div class="hero-actions">
                    <a class="button button-primary" href="#projects">
                        "View my work"
                    </a>
                    <button
                        class="button button-outline"
                        aria-expanded=move || show_contacts.get().to_string()
                        on:click=move |_| show_contacts.update(|open| *open = !*open)
                    >
                        "Say hi"
                    </button>
                </div>
                <Show when=move || show_contacts.get()>
                    <SocialLinks links=config.profile.links.clone() class="hero-contacts" />
                </Show>
            </div>
            <ProfilePortrait portraits=profile.portraits.clone() name=profile.name.clone() />
            <MusicPlayer />
        </section>
    }
}

fn next_portrait(current: usize, len: usize) -> usize {
    content::carousel_next(current, len)
}

#[component]
fn ProfilePortrait(portraits: Vec<String>, name: String) -> impl IntoView {
    let current = create_rw_signal(0usize);
    let count = portraits.len();
    let portraits = store_value(portraits);

    view! {
        <Show when=move || { count > 0 }>
            <button
                class="hero-portrait"
                aria-label="Show next portrait"
                on:click=move |_| current.update(|index| *index = next_portrait(*index, count))
            >
                <img
                    src=move || {
                        portraits.with_value(|images| asset(&images[current.get() % count]))
                    }
                    alt=name.clone()
                />
            </button>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portraits_cycle_back_to_first() {
        assert_eq!(next_portrait(3, 4), 0);
        assert_eq!(next_portrait(1, 4), 2);
    }
}

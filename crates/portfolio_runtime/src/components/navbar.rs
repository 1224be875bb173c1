use super::*;

const SCROLLED_THRESHOLD_PX: f64 = 50.0;

#[component]
pub(super) fn Navbar() -> impl IntoView {
    let runtime = use_portfolio_runtime();
    let profile = &runtime.host.get_value().config().profile;
    let menu_open = create_rw_signal(false);
    let scrolled = create_rw_signal(false);

    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        scrolled.set(offset > SCROLLED_THRESHOLD_PX);
    });
    on_cleanup(move || scroll_listener.remove());

    view! {
        <nav class="navbar" class:navbar-scrolled=move || scrolled.get()>
            <a class="navbar-brand" href="#home">
                {profile.name.clone()}
            </a>
            <button
                class="navbar-menu-toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <ul class="navbar-links" class:navbar-links-open=move || menu_open.get()>
                {content::NAV_SECTIONS
                    .iter()
                    .map(|section| {
                        view! {
                            <li>
                                <a href=section.href on:click=move |_| menu_open.set(false)>
                                    {section.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <SocialLinks links=profile.links.clone() class="navbar-social" />
        </nav>
    }
}

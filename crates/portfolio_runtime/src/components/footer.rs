use super::*;

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub(super) fn Footer() -> impl IntoView {
    let runtime = use_portfolio_runtime();
    let profile = &runtime.host.get_value().config().profile;

    view! {
        <footer class="site-footer">
            <SocialLinks links=profile.links.clone() class="footer-social" />
            <p>
                "Designed & built by " {profile.name.clone()} ". All rights reserved. © "
                {current_year()}
            </p>
        </footer>
    }
}

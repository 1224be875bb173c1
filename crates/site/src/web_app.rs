use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use portfolio_runtime::{site_config, PortfolioPage, PortfolioProvider, ProjectDetail};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let profile = &site_config().profile;

    view! {
        <Title text=format!("{} | Portfolio", profile.name) />
        <Meta name="description" content=profile.headline.clone() />

        <PortfolioProvider host_services=platform_host_web::build_host_services()>
            <Router>
                <main class="site-root">
                    <Routes>
                        <Route path="" view=PortfolioEntry />
                        <Route path="/projects/:slug" view=CanonicalProjectRoute />
                    </Routes>
                </main>
            </Router>
        </PortfolioProvider>
    }
}

#[component]
pub fn PortfolioEntry() -> impl IntoView {
    view! { <PortfolioPage /> }
}

#[component]
fn CanonicalProjectRoute() -> impl IntoView {
    let params = use_params_map();
    let slug = Signal::derive(move || {
        params
            .with(|map| map.get("slug").cloned())
            .unwrap_or_default()
    });

    view! { <ProjectDetail slug=slug /> }
}

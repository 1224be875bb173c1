use std::rc::Rc;

use platform_host::{
    resolve_asset_path, AssetBaseRule, HostCapabilities, HostServices, HostStrategy, HttpFuture,
    HttpResponse, HttpService, MediaPlayerHandle, MediaPlayerService, NoopHttpService,
    NoopMediaPlayerService, NoopTimerService, PlayerEventSink, TimerFuture, TimerService,
};

use crate::{bridge, WebHttpService, WebMediaPlayerService, WebTimerService};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Returns the capability posture for the selected host strategy.
pub const fn host_capabilities() -> HostCapabilities {
    match selected_host_strategy() {
        HostStrategy::Browser => HostCapabilities::browser(),
        HostStrategy::Headless => HostCapabilities::headless(),
    }
}

/// Adapter enum that erases the concrete HTTP backend behind [`HttpService`].
#[derive(Debug, Clone, Copy)]
pub enum HttpServiceAdapter {
    /// Browser `fetch` transport.
    Browser(WebHttpService),
    /// Failing fallback for hosts without network access.
    Headless(NoopHttpService),
}

impl HttpService for HttpServiceAdapter {
    fn get_text<'a>(&'a self, url: &'a str) -> HttpFuture<'a, Result<HttpResponse, String>> {
        match self {
            Self::Browser(service) => service.get_text(url),
            Self::Headless(service) => service.get_text(url),
        }
    }

    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: &'a str,
    ) -> HttpFuture<'a, Result<HttpResponse, String>> {
        match self {
            Self::Browser(service) => service.post_json(url, body),
            Self::Headless(service) => service.post_json(url, body),
        }
    }
}

/// Adapter enum that erases the concrete timer backend behind [`TimerService`].
#[derive(Debug, Clone, Copy)]
pub enum TimerServiceAdapter {
    /// Browser `setTimeout` timers.
    Browser(WebTimerService),
    /// Immediate timers for hosts without an event loop.
    Headless(NoopTimerService),
}

impl TimerService for TimerServiceAdapter {
    fn sleep(&self, delay_ms: u32) -> TimerFuture<'_> {
        match self {
            Self::Browser(service) => service.sleep(delay_ms),
            Self::Headless(service) => service.sleep(delay_ms),
        }
    }
}

/// Adapter enum that erases the concrete embed backend behind [`MediaPlayerService`].
#[derive(Debug, Clone, Copy)]
pub enum MediaPlayerServiceAdapter {
    /// Browser iframe player.
    Browser(WebMediaPlayerService),
    /// Rejecting fallback for hosts without an embeddable player.
    Headless(NoopMediaPlayerService),
}

impl MediaPlayerService for MediaPlayerServiceAdapter {
    fn acquire(
        &self,
        mount_id: &str,
        identifier: &str,
        events: PlayerEventSink,
    ) -> Result<Box<dyn MediaPlayerHandle>, String> {
        match self {
            Self::Browser(service) => service.acquire(mount_id, identifier, events),
            Self::Headless(service) => service.acquire(mount_id, identifier, events),
        }
    }
}

/// Builds the HTTP adapter for the compile-time selected host strategy.
pub fn http_service() -> HttpServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => HttpServiceAdapter::Browser(WebHttpService),
        HostStrategy::Headless => HttpServiceAdapter::Headless(NoopHttpService),
    }
}

/// Builds the timer adapter for the compile-time selected host strategy.
pub fn timer_service() -> TimerServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => TimerServiceAdapter::Browser(WebTimerService),
        HostStrategy::Headless => TimerServiceAdapter::Headless(NoopTimerService),
    }
}

/// Builds the embedded media player adapter for the compile-time selected host strategy.
pub fn media_player_service() -> MediaPlayerServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => MediaPlayerServiceAdapter::Browser(WebMediaPlayerService),
        HostStrategy::Headless => MediaPlayerServiceAdapter::Headless(NoopMediaPlayerService),
    }
}

/// Assembles the full host service bundle injected into the runtime.
pub fn build_host_services() -> HostServices {
    HostServices {
        http: Rc::new(http_service()),
        timers: Rc::new(timer_service()),
        media_player: Rc::new(media_player_service()),
        capabilities: host_capabilities(),
        host_strategy: selected_host_strategy(),
    }
}

/// Returns the page host name, when running in a browser.
pub fn current_host_name() -> Option<String> {
    bridge::current_host_name()
}

/// Resolves a root-relative asset path against the page host.
pub fn asset_path(path: &str, rule: &AssetBaseRule) -> String {
    match current_host_name() {
        Some(host_name) => resolve_asset_path(path, &host_name, rule),
        None => path.to_string(),
    }
}

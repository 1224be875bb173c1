//! Host-side helpers for executing player effects and resolving environment-dependent values.
//!
//! Reducer semantics stay pure; this module owns the injected [`HostServices`] bundle and turns
//! [`PlayerEffect`] values into catalog loads and embed commands.

use std::rc::Rc;

use leptos::{logging, spawn_local, Callable};
use platform_host::{
    HostCapabilities, HostServices, HttpService, PlayerEvent, PlayerEventSink, TimerService,
};

use crate::{
    catalog::{CatalogClient, CatalogError},
    config::{site_config, SiteConfig},
    player_session::player_action_for_event,
    reducer::{PlayerAction, PlayerEffect},
    runtime_context::PortfolioRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle used by the portfolio runtime.
pub struct PortfolioHostContext {
    services: HostServices,
    config: &'static SiteConfig,
}

impl PortfolioHostContext {
    /// Wraps an injected host bundle with the build-time site configuration.
    pub fn new(services: HostServices) -> Self {
        Self {
            services,
            config: site_config(),
        }
    }

    /// Site configuration.
    pub fn config(&self) -> &'static SiteConfig {
        self.config
    }

    /// HTTP service.
    pub fn http(&self) -> Rc<dyn HttpService> {
        self.services.http.clone()
    }

    /// Timer service.
    pub fn timers(&self) -> Rc<dyn TimerService> {
        self.services.timers.clone()
    }

    /// Capability snapshot for the active host.
    pub fn capabilities(&self) -> HostCapabilities {
        self.services.capabilities
    }

    /// Stable host strategy token for diagnostics.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Catalog client for the configured endpoint.
    pub fn catalog_client(&self) -> CatalogClient {
        CatalogClient::new(self.http(), self.timers(), self.config.catalog_endpoint())
    }

    /// Resolves a root-relative static asset path for the current deployment host.
    pub fn asset_path(&self, path: &str) -> String {
        platform_host_web::asset_path(path, &self.config.assets)
    }

    /// Executes one reducer-emitted player effect.
    ///
    /// Catalog results and embed events are dropped once the runtime's [`PlayerSession`] has been
    /// released.
    ///
    /// [`PlayerSession`]: crate::player_session::PlayerSession
    pub fn run_player_effect(&self, runtime: PortfolioRuntimeContext, effect: PlayerEffect) {
        let session = runtime.session.get_value();
        let capabilities = self.capabilities();
        match effect {
            PlayerEffect::FetchCollection => {
                if !capabilities.network.is_supported() {
                    logging::warn!(
                        "skipping catalog load on {} host: {}",
                        self.host_strategy_name(),
                        CatalogError::Offline
                    );
                    runtime.dispatch_action(PlayerAction::LoadFinished(
                        CatalogError::Offline.fallback_load(),
                    ));
                    return;
                }
                let client = self.catalog_client();
                let catalog = self.config.catalog.clone();
                let dispatch = runtime.dispatch;
                spawn_local(async move {
                    let load = client
                        .load_collection_or_fallback(&catalog.collection_id, catalog.max_items)
                        .await;
                    if session.is_live() {
                        dispatch.call(PlayerAction::LoadFinished(load));
                    }
                });
            }
            PlayerEffect::AcquirePlayer { identifier } => {
                if !capabilities.embedded_player.is_supported() {
                    runtime.dispatch_action(PlayerAction::PlayerUnavailable {
                        reason: format!(
                            "embedded playback is not supported on {} host",
                            self.host_strategy_name()
                        ),
                    });
                    return;
                }
                let dispatch = runtime.dispatch;
                let sink_session = session.clone();
                let sink: PlayerEventSink = Rc::new(move |event: PlayerEvent| {
                    if sink_session.is_live() {
                        dispatch.call(player_action_for_event(event));
                    }
                });
                match self.services.media_player.acquire(
                    &self.config.player.mount_id,
                    &identifier,
                    sink,
                ) {
                    Ok(handle) => session.install(handle),
                    Err(reason) => {
                        logging::warn!(
                            "media player unavailable on {} host: {reason}",
                            self.host_strategy_name()
                        );
                        runtime.dispatch_action(PlayerAction::PlayerUnavailable { reason });
                    }
                }
            }
            PlayerEffect::LoadItem { identifier } => {
                session.command(move |player| player.load_item(&identifier));
            }
            PlayerEffect::Play => session.command(|player| player.play()),
            PlayerEffect::Pause => session.command(|player| player.pause()),
            PlayerEffect::ReleasePlayer => session.release(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use leptos::SignalGetUntracked;

    use platform_host::{
        HostStrategy, MediaPlayerHandle, MediaPlayerService, MemoryHttpService,
        MemoryMediaPlayerService, PlayerCall, RecordingTimerService,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        catalog::LOAD_FAILED_NOTICE,
        model::{LoadStatus, FALLBACK_ITEM_ID},
        reducer::PLAYER_UNAVAILABLE_NOTICE,
    };

    fn services(
        http: MemoryHttpService,
        media_player: Rc<dyn MediaPlayerService>,
        capabilities: HostCapabilities,
    ) -> HostServices {
        HostServices {
            http: Rc::new(http),
            timers: Rc::new(RecordingTimerService::default()),
            media_player,
            capabilities,
            host_strategy: HostStrategy::Browser,
        }
    }

    fn browser_runtime(media_player: Rc<dyn MediaPlayerService>) -> PortfolioRuntimeContext {
        PortfolioRuntimeContext::new(PortfolioHostContext::new(services(
            MemoryHttpService::default(),
            media_player,
            HostCapabilities::browser(),
        )))
    }

    fn run(runtime: PortfolioRuntimeContext, effect: PlayerEffect) {
        runtime.host.get_value().run_player_effect(runtime, effect);
    }

    // Keeps delivering events after `destroy`, like an embed that ignores teardown.
    #[derive(Clone, Default)]
    struct LingeringPlayerService {
        sink: Rc<RefCell<Option<PlayerEventSink>>>,
    }

    impl LingeringPlayerService {
        fn emit(&self, event: PlayerEvent) {
            let sink = self.sink.borrow().clone();
            if let Some(sink) = sink {
                sink(event);
            }
        }
    }

    struct LingeringPlayer;

    impl MediaPlayerHandle for LingeringPlayer {
        fn is_ready(&self) -> bool {
            true
        }

        fn on_ready(&self, callback: Box<dyn FnOnce()>) {
            callback();
        }

        fn load_item(&self, _identifier: &str) {}

        fn play(&self) {}

        fn pause(&self) {}

        fn destroy(&self) {}
    }

    impl MediaPlayerService for LingeringPlayerService {
        fn acquire(
            &self,
            _mount_id: &str,
            _identifier: &str,
            events: PlayerEventSink,
        ) -> Result<Box<dyn MediaPlayerHandle>, String> {
            *self.sink.borrow_mut() = Some(events);
            Ok(Box::new(LingeringPlayer))
        }
    }

    #[test]
    fn asset_paths_are_left_alone_off_browser() {
        let _ = leptos::create_runtime();
        let host = PortfolioHostContext::new(services(
            MemoryHttpService::default(),
            Rc::new(MemoryMediaPlayerService::default()),
            HostCapabilities::headless(),
        ));
        assert_eq!(host.asset_path("/hero/1.png"), "/hero/1.png");
        assert_eq!(host.host_strategy_name(), "browser");
    }

    #[test]
    fn catalog_result_reaches_live_session() {
        let _ = leptos::create_runtime();
        let runtime = browser_runtime(Rc::new(MemoryMediaPlayerService::default()));
        runtime.dispatch_action(PlayerAction::LoadRequested);

        run(runtime, PlayerEffect::FetchCollection);

        let state = runtime.player.get_untracked();
        assert!(!state.loading);
        assert_eq!(state.playlist.load_status(), LoadStatus::Failed);
        assert_eq!(state.notice.as_deref(), Some(LOAD_FAILED_NOTICE));
    }

    #[test]
    fn catalog_result_after_release_is_dropped() {
        let _ = leptos::create_runtime();
        let runtime = browser_runtime(Rc::new(MemoryMediaPlayerService::default()));
        runtime.dispatch_action(PlayerAction::LoadRequested);
        let before = runtime.player.get_untracked();

        runtime.session.get_value().release();
        run(runtime, PlayerEffect::FetchCollection);

        let after = runtime.player.get_untracked();
        assert_eq!(after, before);
        assert!(after.loading);
        assert_eq!(after.playlist.load_status(), LoadStatus::Loading);
        assert_eq!(after.notice, None);
    }

    #[test]
    fn offline_host_falls_back_without_requests() {
        let _ = leptos::create_runtime();
        let http = MemoryHttpService::default();
        let runtime = PortfolioRuntimeContext::new(PortfolioHostContext::new(services(
            http.clone(),
            Rc::new(MemoryMediaPlayerService::default()),
            HostCapabilities::headless(),
        )));
        runtime.dispatch_action(PlayerAction::LoadRequested);

        run(runtime, PlayerEffect::FetchCollection);

        let state = runtime.player.get_untracked();
        assert!(http.requests().is_empty());
        assert!(!state.loading);
        assert_eq!(state.playlist.current().identifier, FALLBACK_ITEM_ID);
        assert_eq!(state.notice.as_deref(), Some(LOAD_FAILED_NOTICE));
    }

    #[test]
    fn embed_events_after_release_dispatch_nothing() {
        let _ = leptos::create_runtime();
        let players = LingeringPlayerService::default();
        let runtime = browser_runtime(Rc::new(players.clone()));
        runtime.dispatch_action(PlayerAction::ToggleWidget);
        run(
            runtime,
            PlayerEffect::AcquirePlayer {
                identifier: FALLBACK_ITEM_ID.to_string(),
            },
        );

        players.emit(PlayerEvent::Ready);
        assert!(runtime.player.get_untracked().player_ready);

        run(runtime, PlayerEffect::ReleasePlayer);
        let before = runtime.player.get_untracked();
        players.emit(PlayerEvent::Playing);
        players.emit(PlayerEvent::Ended);

        assert_eq!(runtime.player.get_untracked(), before);
        assert!(!before.is_playing);
    }

    #[test]
    fn memory_player_events_stop_after_release() {
        let _ = leptos::create_runtime();
        let players = MemoryMediaPlayerService::default();
        let runtime = browser_runtime(Rc::new(players.clone()));
        runtime.dispatch_action(PlayerAction::ToggleWidget);
        run(
            runtime,
            PlayerEffect::AcquirePlayer {
                identifier: FALLBACK_ITEM_ID.to_string(),
            },
        );
        players.mark_ready();
        assert!(runtime.player.get_untracked().player_ready);

        runtime.session.get_value().release();
        let before = runtime.player.get_untracked();
        players.emit(PlayerEvent::Playing);

        assert_eq!(runtime.player.get_untracked(), before);
        assert_eq!(players.calls().last(), Some(&PlayerCall::Destroy));
    }

    #[test]
    fn unsupported_embed_reports_unavailable_without_acquiring() {
        let _ = leptos::create_runtime();
        let players = MemoryMediaPlayerService::default();
        let runtime = PortfolioRuntimeContext::new(PortfolioHostContext::new(services(
            MemoryHttpService::default(),
            Rc::new(players.clone()),
            HostCapabilities::headless(),
        )));
        runtime.dispatch_action(PlayerAction::ToggleWidget);

        run(
            runtime,
            PlayerEffect::AcquirePlayer {
                identifier: FALLBACK_ITEM_ID.to_string(),
            },
        );

        let state = runtime.player.get_untracked();
        assert!(players.calls().is_empty());
        assert!(!state.has_started);
        assert_eq!(state.notice.as_deref(), Some(PLAYER_UNAVAILABLE_NOTICE));
    }
}

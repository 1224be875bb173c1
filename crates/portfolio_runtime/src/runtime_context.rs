//! Runtime provider and context wiring for the portfolio page.
//!
//! This module owns the player reducer container, the effect queue, and the player session.
//! UI composition stays in [`crate::components`].

use leptos::*;
use platform_host::HostServices;

use crate::{
    effect_executor,
    host::PortfolioHostContext,
    model::PlayerState,
    player_session::PlayerSession,
    reducer::{reduce_player, PlayerAction, PlayerEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading player state and dispatching [`PlayerAction`] values.
pub struct PortfolioRuntimeContext {
    /// Host service bundle for executing side effects.
    pub host: StoredValue<PortfolioHostContext>,
    /// Reactive player widget state.
    pub player: RwSignal<PlayerState>,
    /// Queue of effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<PlayerEffect>>,
    /// Embedded player owned by this page.
    pub session: StoredValue<PlayerSession>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<PlayerAction>,
}

impl PortfolioRuntimeContext {
    /// Creates the reducer container and dispatch callback in the current reactive owner.
    ///
    /// Effects are only queued here; [`PortfolioProvider`] installs the executor that runs them.
    pub fn new(host: PortfolioHostContext) -> Self {
        let player = create_rw_signal(PlayerState::default());
        let effects = create_rw_signal(Vec::<PlayerEffect>::new());

        let dispatch = Callback::new(move |action: PlayerAction| {
            let Some(mut state) = player.try_get_untracked() else {
                return;
            };
            let previous = state.clone();

            match reduce_player(&mut state, action) {
                Ok(new_effects) => {
                    if state != previous {
                        let _ = player.try_set(state);
                    }
                    if !new_effects.is_empty() {
                        let _ = effects.try_update(|queue| queue.extend(new_effects));
                    }
                }
                Err(err) => logging::warn!("player reducer error: {err}"),
            }
        });

        Self {
            host: store_value(host),
            player,
            effects,
            session: store_value(PlayerSession::default()),
            dispatch,
        }
    }

    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: PlayerAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`PortfolioRuntimeContext`] to descendant components and starts the collection load.
pub fn PortfolioProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let runtime = PortfolioRuntimeContext::new(PortfolioHostContext::new(host_services));
    let player = runtime.player;
    let session = runtime.session.get_value();

    provide_context(runtime);
    effect_executor::install(runtime);
    runtime.dispatch_action(PlayerAction::LoadRequested);

    // Signals may already be gone when cleanups run, so teardown goes through the session.
    on_cleanup(move || {
        let _ = player.try_update(|state| {
            let _ = reduce_player(state, PlayerAction::Teardown);
        });
        session.release();
    });

    children().into_view()
}

/// Returns the current [`PortfolioRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`PortfolioProvider`].
pub fn use_portfolio_runtime() -> PortfolioRuntimeContext {
    use_context::<PortfolioRuntimeContext>().expect("PortfolioRuntimeContext not provided")
}

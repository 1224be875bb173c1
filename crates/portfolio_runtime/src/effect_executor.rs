//! Effect-queue executor for reducer-emitted player effects.

use leptos::*;

use crate::runtime_context::PortfolioRuntimeContext;

/// Installs the executor that drains queued player effects in order.
pub fn install(runtime: PortfolioRuntimeContext) {
    // Clear the queue before running so effects that dispatch again enqueue a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in queued {
            host.run_player_effect(runtime, effect);
        }
    });
}

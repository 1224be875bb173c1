//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for HTTP, timers, the embedded
//! media player, and page location lookups.
//!
//! Bridge bindings are split by domain under `bridge/`:
//! - `bridge::http`
//! - `bridge::timer`
//! - `bridge::player`
//! - `bridge::interop` (shared wasm/non-wasm transport glue)

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod http;
pub mod player;
pub mod timer;

pub use adapters::{
    asset_path, build_host_services, current_host_name, host_capabilities, host_strategy_name,
    http_service, media_player_service, selected_host_strategy, timer_service,
    HttpServiceAdapter, MediaPlayerServiceAdapter, TimerServiceAdapter,
};
pub use http::WebHttpService;
pub use player::WebMediaPlayerService;
pub use timer::WebTimerService;

//! Typed host-domain contracts shared by the portfolio runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the HTTP, timer,
//! embedded-player, and asset-path contracts together with no-op and in-memory adapters, while
//! concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod assets;
pub mod host;
pub mod http;
pub mod player;
pub mod timer;

pub use assets::{resolve_asset_path, AssetBaseRule};
pub use host::{CapabilityStatus, HostCapabilities, HostServices, HostStrategy};
pub use http::{
    HttpFuture, HttpMethod, HttpRequestRecord, HttpResponse, HttpService, MemoryHttpService,
    NoopHttpService,
};
pub use player::{
    MediaPlayerHandle, MediaPlayerService, MemoryMediaPlayerService, NoopMediaPlayerService,
    PlayerCall, PlayerEvent, PlayerEventSink,
};
pub use timer::{NoopTimerService, RecordingTimerService, TimerFuture, TimerService};

//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for higher-level bridge domain modules.

use platform_host::{HttpResponse, PlayerEventSink};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub use imp::PlayerBinding;

pub async fn http_get_text(url: &str) -> Result<HttpResponse, String> {
    imp::http_get_text(url).await
}

pub async fn http_post_json(url: &str, body: &str) -> Result<HttpResponse, String> {
    imp::http_post_json(url, body).await
}

pub async fn sleep_ms(delay_ms: u32) {
    imp::sleep_ms(delay_ms).await
}

pub fn player_create(
    mount_id: &str,
    video_id: &str,
    events: PlayerEventSink,
) -> Result<PlayerBinding, String> {
    imp::player_create(mount_id, video_id, events)
}

pub fn current_host_name() -> Option<String> {
    imp::current_host_name()
}

//! Browser capability bridge implementations for `platform_host_web` service adapters.
//!
//! This module is organized by host domain (`http`, `timer`, `player`) while preserving a
//! stable API for the adapters in this crate.

mod http;
mod interop;
mod player;
mod timer;

use platform_host::{HttpResponse, PlayerEventSink};

pub use interop::PlayerBinding;

pub async fn http_get_text(url: &str) -> Result<HttpResponse, String> {
    http::http_get_text(url).await
}

pub async fn http_post_json(url: &str, body: &str) -> Result<HttpResponse, String> {
    http::http_post_json(url, body).await
}

pub async fn sleep_ms(delay_ms: u32) {
    timer::sleep_ms(delay_ms).await
}

pub fn player_create(
    mount_id: &str,
    video_id: &str,
    events: PlayerEventSink,
) -> Result<PlayerBinding, String> {
    player::player_create(mount_id, video_id, events)
}

pub fn current_host_name() -> Option<String> {
    interop::current_host_name()
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use platform_host::PlayerEvent;

    use super::*;

    #[test]
    fn non_wasm_bridge_reports_unsupported_network_and_player() {
        let expected = "Browser network and media APIs are only available when compiled for wasm32"
            .to_string();

        assert_eq!(
            block_on(http_get_text("https://example.test")).expect_err("get should fail"),
            expected
        );
        assert_eq!(
            block_on(http_post_json("https://example.test", "{}")).expect_err("post should fail"),
            expected
        );
        assert_eq!(
            player_create("mount", "abc", Rc::new(|_: PlayerEvent| {})).expect_err("player should fail"),
            expected
        );
        assert_eq!(current_host_name(), None);
    }

    #[test]
    fn non_wasm_sleep_resolves_immediately() {
        block_on(sleep_ms(1_000));
    }
}

use super::*;

fn unsupported() -> String {
    "Browser network and media APIs are only available when compiled for wasm32".to_string()
}

pub async fn http_get_text(_url: &str) -> Result<HttpResponse, String> {
    Err(unsupported())
}

pub async fn http_post_json(_url: &str, _body: &str) -> Result<HttpResponse, String> {
    Err(unsupported())
}

pub async fn sleep_ms(_delay_ms: u32) {}

pub fn player_create(
    _mount_id: &str,
    _video_id: &str,
    _events: PlayerEventSink,
) -> Result<PlayerBinding, String> {
    Err(unsupported())
}

pub fn current_host_name() -> Option<String> {
    None
}

/// Placeholder binding; never constructed off-wasm.
#[derive(Debug)]
pub struct PlayerBinding {
    _private: (),
}

impl PlayerBinding {
    pub fn is_ready(&self) -> bool {
        false
    }

    pub fn on_ready(&self, _callback: Box<dyn FnOnce()>) {}

    pub fn load_item(&self, _video_id: &str) {}

    pub fn play(&self) {}

    pub fn pause(&self) {}

    pub fn destroy(&self) {}
}

use std::cell::Cell;

use js_sys::{Function, Promise};
use platform_host::PlayerEvent;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::{closure::Closure, prelude::*, JsCast};
use wasm_bindgen_futures::JsFuture;

use super::*;

#[wasm_bindgen(inline_js = r#"
const PLAYER_API_SRC = 'https://www.youtube.com/iframe_api';
const players = new Map();
let nextPlayerId = 1;
let playerApiReady = null;

function loadPlayerApi() {
  if (window.YT && window.YT.Player) {
    return Promise.resolve();
  }
  if (playerApiReady) {
    return playerApiReady;
  }
  playerApiReady = new Promise((resolve) => {
    const previous = window.onYouTubeIframeAPIReady;
    window.onYouTubeIframeAPIReady = () => {
      if (typeof previous === 'function') {
        previous();
      }
      resolve();
    };
    if (!document.querySelector(`script[src="${PLAYER_API_SRC}"]`)) {
      const tag = document.createElement('script');
      tag.src = PLAYER_API_SRC;
      document.head.appendChild(tag);
    }
  });
  return playerApiReady;
}

export async function httpGetText(url) {
  const response = await fetch(url);
  const body = await response.text();
  return { status: response.status, body };
}

export async function httpPostJson(url, body) {
  const response = await fetch(url, {
    method: 'POST',
    headers: { 'Content-Type': 'application/json', Accept: 'application/json' },
    body,
  });
  const text = await response.text();
  return { status: response.status, body: text };
}

export function sleepMs(ms) {
  return new Promise((resolve) => setTimeout(resolve, ms));
}

export function playerCreate(mountId, videoId, onEvent) {
  const id = nextPlayerId++;
  const entry = { player: null, ready: false, destroyed: false, readyCallbacks: [] };
  players.set(id, entry);
  loadPlayerApi().then(() => {
    if (entry.destroyed) {
      return;
    }
    entry.player = new window.YT.Player(mountId, {
      height: '100%',
      width: '100%',
      videoId,
      playerVars: {
        autoplay: 1,
        mute: 0,
        controls: 0,
        rel: 0,
        iv_load_policy: 3,
        modestbranding: 1,
        enablejsapi: 1,
        origin: window.location.origin,
      },
      events: {
        onReady: () => {
          if (entry.destroyed) {
            return;
          }
          entry.ready = true;
          for (const callback of entry.readyCallbacks.splice(0)) {
            callback();
          }
          onEvent('ready');
        },
        onStateChange: (event) => {
          if (entry.destroyed) {
            return;
          }
          const states = window.YT.PlayerState;
          if (event.data === states.ENDED) {
            onEvent('ended');
          } else if (event.data === states.PLAYING) {
            onEvent('playing');
          } else if (event.data === states.PAUSED) {
            onEvent('paused');
          }
        },
      },
    });
  });
  return id;
}

export function playerIsReady(id) {
  const entry = players.get(id);
  return Boolean(entry && entry.ready);
}

export function playerOnReady(id, callback) {
  const entry = players.get(id);
  if (!entry) {
    return;
  }
  if (entry.ready) {
    callback();
  } else {
    entry.readyCallbacks.push(callback);
  }
}

export function playerLoad(id, videoId) {
  const entry = players.get(id);
  if (entry && entry.ready) {
    entry.player.loadVideoById(videoId);
  }
}

export function playerPlay(id) {
  const entry = players.get(id);
  if (entry && entry.ready) {
    entry.player.playVideo();
  }
}

export function playerPause(id) {
  const entry = players.get(id);
  if (entry && entry.ready) {
    entry.player.pauseVideo();
  }
}

export function playerDestroy(id) {
  const entry = players.get(id);
  if (!entry) {
    return;
  }
  entry.destroyed = true;
  entry.ready = false;
  entry.readyCallbacks = [];
  players.delete(id);
  if (entry.player) {
    entry.player.destroy();
  }
}
"#)]
extern "C" {
    #[wasm_bindgen(catch, js_name = httpGetText)]
    fn js_http_get_text(url: &str) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_name = httpPostJson)]
    fn js_http_post_json(url: &str, body: &str) -> Result<Promise, JsValue>;

    #[wasm_bindgen(js_name = sleepMs)]
    fn js_sleep_ms(ms: u32) -> Promise;

    #[wasm_bindgen(catch, js_name = playerCreate)]
    fn js_player_create(
        mount_id: &str,
        video_id: &str,
        on_event: &Function,
    ) -> Result<u32, JsValue>;

    #[wasm_bindgen(js_name = playerIsReady)]
    fn js_player_is_ready(id: u32) -> bool;

    #[wasm_bindgen(js_name = playerOnReady)]
    fn js_player_on_ready(id: u32, callback: &Function);

    #[wasm_bindgen(js_name = playerLoad)]
    fn js_player_load(id: u32, video_id: &str);

    #[wasm_bindgen(js_name = playerPlay)]
    fn js_player_play(id: u32);

    #[wasm_bindgen(js_name = playerPause)]
    fn js_player_pause(id: u32);

    #[wasm_bindgen(js_name = playerDestroy)]
    fn js_player_destroy(id: u32);
}

fn js_error(context: &str, err: JsValue) -> String {
    let detail = err
        .as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"));
    format!("{context}: {detail}")
}

async fn await_response(
    promise: Result<Promise, JsValue>,
    context: &str,
) -> Result<HttpResponse, String> {
    let promise = promise.map_err(|err| js_error(context, err))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|err| js_error(context, err))?;
    from_value(value).map_err(|err| format!("{context}: {err}"))
}

pub async fn http_get_text(url: &str) -> Result<HttpResponse, String> {
    await_response(js_http_get_text(url), "fetch failed").await
}

pub async fn http_post_json(url: &str, body: &str) -> Result<HttpResponse, String> {
    await_response(js_http_post_json(url, body), "post failed").await
}

pub async fn sleep_ms(delay_ms: u32) {
    let _ = JsFuture::from(js_sleep_ms(delay_ms)).await;
}

fn decode_player_event(name: &str) -> Option<PlayerEvent> {
    match name {
        "ready" => Some(PlayerEvent::Ready),
        "playing" => Some(PlayerEvent::Playing),
        "paused" => Some(PlayerEvent::Paused),
        "ended" => Some(PlayerEvent::Ended),
        _ => None,
    }
}

pub fn player_create(
    mount_id: &str,
    video_id: &str,
    events: PlayerEventSink,
) -> Result<PlayerBinding, String> {
    let on_event = Closure::wrap(Box::new(move |name: String| {
        if let Some(event) = decode_player_event(&name) {
            events(event);
        }
    }) as Box<dyn Fn(String)>);
    let id = js_player_create(mount_id, video_id, on_event.as_ref().unchecked_ref())
        .map_err(|err| js_error("player create failed", err))?;
    Ok(PlayerBinding {
        id,
        destroyed: Cell::new(false),
        _on_event: on_event,
    })
}

pub fn current_host_name() -> Option<String> {
    web_sys::window()?.location().hostname().ok()
}

/// Live embedded player owned by one [`platform_host::MediaPlayerHandle`].
pub struct PlayerBinding {
    id: u32,
    destroyed: Cell<bool>,
    _on_event: Closure<dyn Fn(String)>,
}

impl std::fmt::Debug for PlayerBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerBinding")
            .field("id", &self.id)
            .field("destroyed", &self.destroyed.get())
            .finish()
    }
}

impl PlayerBinding {
    pub fn is_ready(&self) -> bool {
        !self.destroyed.get() && js_player_is_ready(self.id)
    }

    pub fn on_ready(&self, callback: Box<dyn FnOnce()>) {
        if self.destroyed.get() {
            return;
        }
        let callback = Closure::once_into_js(move || callback());
        js_player_on_ready(self.id, callback.unchecked_ref());
    }

    pub fn load_item(&self, video_id: &str) {
        if !self.destroyed.get() {
            js_player_load(self.id, video_id);
        }
    }

    pub fn play(&self) {
        if !self.destroyed.get() {
            js_player_play(self.id);
        }
    }

    pub fn pause(&self) {
        if !self.destroyed.get() {
            js_player_pause(self.id);
        }
    }

    pub fn destroy(&self) {
        if !self.destroyed.replace(true) {
            js_player_destroy(self.id);
        }
    }
}

impl Drop for PlayerBinding {
    fn drop(&mut self) {
        self.destroy();
    }
}

//! Embedded media player adapter backed by the hosted iframe player API.
//!
//! The player script is injected once per page on first acquisition. Each acquired handle
//! owns its own embed and tears it down on [`MediaPlayerHandle::destroy`] or drop.

use platform_host::{MediaPlayerHandle, MediaPlayerService, PlayerEventSink};

use crate::bridge::{self, PlayerBinding};

#[derive(Debug, Clone, Copy, Default)]
/// Browser media player factory.
pub struct WebMediaPlayerService;

impl MediaPlayerService for WebMediaPlayerService {
    fn acquire(
        &self,
        mount_id: &str,
        identifier: &str,
        events: PlayerEventSink,
    ) -> Result<Box<dyn MediaPlayerHandle>, String> {
        let binding = bridge::player_create(mount_id, identifier, events)?;
        Ok(Box::new(WebMediaPlayer { binding }))
    }
}

#[derive(Debug)]
struct WebMediaPlayer {
    binding: PlayerBinding,
}

impl MediaPlayerHandle for WebMediaPlayer {
    fn is_ready(&self) -> bool {
        self.binding.is_ready()
    }

    fn on_ready(&self, callback: Box<dyn FnOnce()>) {
        self.binding.on_ready(callback);
    }

    fn load_item(&self, identifier: &str) {
        self.binding.load_item(identifier);
    }

    fn play(&self) {
        self.binding.play();
    }

    fn pause(&self) {
        self.binding.pause();
    }

    fn destroy(&self) {
        self.binding.destroy();
    }
}

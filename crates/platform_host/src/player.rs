//! Embedded media player capability contracts.
//!
//! A player is acquired by one owner (the widget that renders it), driven through a
//! [`MediaPlayerHandle`], and released with [`MediaPlayerHandle::destroy`]. There is no
//! process-wide player: every handle owns its own underlying embed.

use std::{cell::RefCell, rc::Rc};

/// Playback events reported by an embedded player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The embed finished loading and accepts commands.
    Ready,
    /// Playback started or resumed.
    Playing,
    /// Playback paused.
    Paused,
    /// The current item finished playing.
    Ended,
}

/// Callback receiving [`PlayerEvent`] values from an acquired player.
pub type PlayerEventSink = Rc<dyn Fn(PlayerEvent)>;

/// Capability object for one acquired embedded player.
pub trait MediaPlayerHandle {
    /// Returns whether the player accepts commands.
    fn is_ready(&self) -> bool;

    /// Runs `callback` once the player is ready, immediately if it already is.
    fn on_ready(&self, callback: Box<dyn FnOnce()>);

    /// Replaces the current item and starts playing it.
    fn load_item(&self, identifier: &str);

    /// Resumes playback.
    fn play(&self);

    /// Pauses playback.
    fn pause(&self);

    /// Tears down the embed. No events are delivered afterwards.
    fn destroy(&self);
}

/// Host service that creates embedded players.
pub trait MediaPlayerService {
    /// Creates a player inside the DOM node `mount_id`, starting with `identifier`.
    fn acquire(
        &self,
        mount_id: &str,
        identifier: &str,
        events: PlayerEventSink,
    ) -> Result<Box<dyn MediaPlayerHandle>, String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Player service for hosts without an embeddable player.
pub struct NoopMediaPlayerService;

impl MediaPlayerService for NoopMediaPlayerService {
    fn acquire(
        &self,
        _mount_id: &str,
        _identifier: &str,
        _events: PlayerEventSink,
    ) -> Result<Box<dyn MediaPlayerHandle>, String> {
        Err("embedded media playback is unavailable on this host".to_string())
    }
}

/// Command observed by [`MemoryMediaPlayerService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCall {
    /// `acquire(mount_id, identifier)`
    Acquire {
        /// DOM mount id.
        mount_id: String,
        /// Initial item.
        identifier: String,
    },
    /// `load_item(identifier)`
    LoadItem(String),
    /// `play()`
    Play,
    /// `pause()`
    Pause,
    /// `destroy()`
    Destroy,
}

#[derive(Default)]
struct MemoryPlayerInner {
    calls: Vec<PlayerCall>,
    ready: bool,
    destroyed: bool,
    ready_callbacks: Vec<Box<dyn FnOnce()>>,
    sink: Option<PlayerEventSink>,
}

#[derive(Clone, Default)]
/// In-memory player service that records commands and lets tests drive player events.
pub struct MemoryMediaPlayerService {
    inner: Rc<RefCell<MemoryPlayerInner>>,
}

impl std::fmt::Debug for MemoryMediaPlayerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("MemoryMediaPlayerService")
            .field("calls", &inner.calls)
            .field("ready", &inner.ready)
            .field("destroyed", &inner.destroyed)
            .finish()
    }
}

impl MemoryMediaPlayerService {
    /// Returns every recorded command in order.
    pub fn calls(&self) -> Vec<PlayerCall> {
        self.inner.borrow().calls.clone()
    }

    /// Marks the acquired player ready, flushing pending ready callbacks.
    pub fn mark_ready(&self) {
        let (callbacks, sink) = {
            let mut inner = self.inner.borrow_mut();
            if inner.destroyed {
                return;
            }
            inner.ready = true;
            (std::mem::take(&mut inner.ready_callbacks), inner.sink.clone())
        };
        for callback in callbacks {
            callback();
        }
        if let Some(sink) = sink {
            sink(PlayerEvent::Ready);
        }
    }

    /// Delivers a player event unless the player has been destroyed.
    pub fn emit(&self, event: PlayerEvent) {
        let sink = {
            let inner = self.inner.borrow();
            if inner.destroyed {
                return;
            }
            inner.sink.clone()
        };
        if let Some(sink) = sink {
            sink(event);
        }
    }
}

impl MediaPlayerService for MemoryMediaPlayerService {
    fn acquire(
        &self,
        mount_id: &str,
        identifier: &str,
        events: PlayerEventSink,
    ) -> Result<Box<dyn MediaPlayerHandle>, String> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(PlayerCall::Acquire {
            mount_id: mount_id.to_string(),
            identifier: identifier.to_string(),
        });
        inner.ready = false;
        inner.destroyed = false;
        inner.sink = Some(events);
        Ok(Box::new(MemoryMediaPlayer {
            inner: self.inner.clone(),
        }))
    }
}

struct MemoryMediaPlayer {
    inner: Rc<RefCell<MemoryPlayerInner>>,
}

impl MemoryMediaPlayer {
    fn record(&self, call: PlayerCall) {
        let mut inner = self.inner.borrow_mut();
        if !inner.destroyed {
            inner.calls.push(call);
        }
    }
}

impl MediaPlayerHandle for MemoryMediaPlayer {
    fn is_ready(&self) -> bool {
        let inner = self.inner.borrow();
        inner.ready && !inner.destroyed
    }

    fn on_ready(&self, callback: Box<dyn FnOnce()>) {
        if self.is_ready() {
            callback();
            return;
        }
        self.inner.borrow_mut().ready_callbacks.push(callback);
    }

    fn load_item(&self, identifier: &str) {
        self.record(PlayerCall::LoadItem(identifier.to_string()));
    }

    fn play(&self) {
        self.record(PlayerCall::Play);
    }

    fn pause(&self) {
        self.record(PlayerCall::Pause);
    }

    fn destroy(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.destroyed {
            return;
        }
        inner.calls.push(PlayerCall::Destroy);
        inner.destroyed = true;
        inner.ready = false;
        inner.ready_callbacks.clear();
        inner.sink = None;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn ready_callbacks_run_once_player_becomes_ready() {
        let service = MemoryMediaPlayerService::default();
        let fired = Rc::new(Cell::new(0));
        let handle = service
            .acquire("mount", "abc", Rc::new(|_: PlayerEvent| {}))
            .expect("acquire");

        let counter = fired.clone();
        handle.on_ready(Box::new(move || counter.set(counter.get() + 1)));
        assert_eq!(fired.get(), 0);

        service.mark_ready();
        assert_eq!(fired.get(), 1);
        assert!(handle.is_ready());

        let counter = fired.clone();
        handle.on_ready(Box::new(move || counter.set(counter.get() + 1)));
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn destroyed_player_drops_events_and_commands() {
        let service = MemoryMediaPlayerService::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink_seen = seen.clone();
        let handle = service
            .acquire(
                "mount",
                "abc",
                Rc::new(move |event: PlayerEvent| sink_seen.borrow_mut().push(event)),
            )
            .expect("acquire");

        service.emit(PlayerEvent::Playing);
        handle.destroy();
        handle.destroy();
        handle.play();
        service.emit(PlayerEvent::Ended);

        assert_eq!(*seen.borrow(), vec![PlayerEvent::Playing]);
        assert_eq!(
            service.calls(),
            vec![
                PlayerCall::Acquire {
                    mount_id: "mount".to_string(),
                    identifier: "abc".to_string(),
                },
                PlayerCall::Destroy,
            ]
        );
    }

    #[test]
    fn noop_player_service_rejects_acquire() {
        assert!(NoopMediaPlayerService
            .acquire("mount", "abc", Rc::new(|_: PlayerEvent| {}))
            .is_err());
    }
}

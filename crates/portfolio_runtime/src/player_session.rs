//! Exclusive ownership of the embedded player acquired by the hero widget.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use platform_host::{MediaPlayerHandle, PlayerEvent};

use crate::reducer::PlayerAction;

/// Maps an embed event to the reducer action it reports.
pub fn player_action_for_event(event: PlayerEvent) -> PlayerAction {
    match event {
        PlayerEvent::Ready => PlayerAction::PlayerReady,
        PlayerEvent::Playing => PlayerAction::PlaybackStarted,
        PlayerEvent::Paused => PlayerAction::PlaybackPaused,
        PlayerEvent::Ended => PlayerAction::PlaybackEnded,
    }
}

/// Owner of at most one acquired player handle.
///
/// Once [`PlayerSession::release`] runs the session is closed: the handle is destroyed, later
/// installs are destroyed immediately, and [`PlayerSession::is_live`] reports `false` so
/// pending callbacks can drop their results.
#[derive(Clone, Default)]
pub struct PlayerSession {
    handle: Rc<RefCell<Option<Box<dyn MediaPlayerHandle>>>>,
    closed: Rc<Cell<bool>>,
}

impl PlayerSession {
    /// Returns whether the owning widget is still mounted.
    pub fn is_live(&self) -> bool {
        !self.closed.get()
    }

    /// Returns whether a player handle is held.
    pub fn has_player(&self) -> bool {
        self.handle.borrow().is_some()
    }

    /// Stores a newly acquired handle, destroying any previous one.
    pub fn install(&self, handle: Box<dyn MediaPlayerHandle>) {
        if self.closed.get() {
            handle.destroy();
            return;
        }
        if let Some(previous) = self.handle.borrow_mut().replace(handle) {
            previous.destroy();
        }
    }

    /// Runs `command` against the held handle once it is ready.
    ///
    /// Commands issued before readiness are queued on the handle.
    pub fn command(&self, command: impl FnOnce(&dyn MediaPlayerHandle) + 'static) {
        let session = self.clone();
        let guard = self.handle.borrow();
        let Some(handle) = guard.as_deref() else {
            return;
        };
        if handle.is_ready() {
            command(handle);
            return;
        }
        handle.on_ready(Box::new(move || {
            if let Some(handle) = session.handle.borrow().as_deref() {
                command(handle);
            }
        }));
    }

    /// Destroys the held handle and closes the session. Idempotent.
    pub fn release(&self) {
        self.closed.set(true);
        if let Some(handle) = self.handle.borrow_mut().take() {
            handle.destroy();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use platform_host::{MediaPlayerService, MemoryMediaPlayerService, PlayerCall};
    use pretty_assertions::assert_eq;

    use super::*;

    fn acquire(service: &MemoryMediaPlayerService) -> Box<dyn MediaPlayerHandle> {
        service
            .acquire("mount", "first", Rc::new(|_: PlayerEvent| {}))
            .expect("acquire")
    }

    #[test]
    fn commands_wait_for_ready_player() {
        let service = MemoryMediaPlayerService::default();
        let session = PlayerSession::default();
        session.install(acquire(&service));

        session.command(|player| player.load_item("second"));
        assert_eq!(service.calls().len(), 1);

        service.mark_ready();
        assert_eq!(
            service.calls().last(),
            Some(&PlayerCall::LoadItem("second".to_string()))
        );
    }

    #[test]
    fn release_destroys_once_and_closes_session() {
        let service = MemoryMediaPlayerService::default();
        let session = PlayerSession::default();
        session.install(acquire(&service));
        service.mark_ready();

        session.release();
        session.release();
        assert!(!session.is_live());
        assert!(!session.has_player());
        assert_eq!(
            service
                .calls()
                .iter()
                .filter(|call| **call == PlayerCall::Destroy)
                .count(),
            1
        );

        session.command(|player| player.play());
        assert_eq!(service.calls().last(), Some(&PlayerCall::Destroy));
    }

    #[test]
    fn install_after_release_destroys_handle() {
        let service = MemoryMediaPlayerService::default();
        let session = PlayerSession::default();
        session.release();
        session.install(acquire(&service));
        assert!(!session.has_player());
        assert_eq!(service.calls().last(), Some(&PlayerCall::Destroy));
    }

    #[test]
    fn events_map_to_reducer_actions() {
        assert_eq!(
            player_action_for_event(PlayerEvent::Ended),
            PlayerAction::PlaybackEnded
        );
        assert_eq!(
            player_action_for_event(PlayerEvent::Ready),
            PlayerAction::PlayerReady
        );
    }
}

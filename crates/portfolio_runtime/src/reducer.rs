//! Player widget reducer.
//!
//! [`reduce_player`] owns every player-widget state transition and returns side effects for the
//! effect executor instead of touching the embed directly.

use thiserror::Error;

use crate::model::{PlayerState, PlaylistError, PlaylistLoad};

/// Notice shown when the embedded player cannot be created.
pub const PLAYER_UNAVAILABLE_NOTICE: &str = "Player unavailable";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_player`].
pub enum PlayerAction {
    /// Request a (re)load of the collection.
    LoadRequested,
    /// A collection load completed (possibly with the fallback collection).
    LoadFinished(PlaylistLoad),
    /// Start the widget on first use, then expand or collapse it.
    ToggleWidget,
    /// Show or hide the playlist panel.
    TogglePlaylist,
    /// Pause when playing, resume when paused.
    TogglePlayback,
    /// Skip to the next item.
    Next,
    /// Jump to a specific item.
    Select {
        /// Identifier of the requested item.
        identifier: String,
    },
    /// The embed reported readiness.
    PlayerReady,
    /// The embed reported playback.
    PlaybackStarted,
    /// The embed reported a pause.
    PlaybackPaused,
    /// The embed reported the current item finished.
    PlaybackEnded,
    /// The embed could not be created.
    PlayerUnavailable {
        /// Host-reported reason.
        reason: String,
    },
    /// The widget is being unmounted.
    Teardown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects emitted by [`reduce_player`].
pub enum PlayerEffect {
    /// Load the configured collection.
    FetchCollection,
    /// Create the embed starting with `identifier`.
    AcquirePlayer {
        /// Initial item.
        identifier: String,
    },
    /// Load `identifier` into the live embed.
    LoadItem {
        /// Item to load.
        identifier: String,
    },
    /// Resume playback.
    Play,
    /// Pause playback.
    Pause,
    /// Destroy the embed.
    ReleasePlayer,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Player reducer error.
pub enum PlayerError {
    /// The widget was torn down and accepts no further actions.
    #[error("player widget was torn down")]
    TornDown,
    /// A playlist navigation failed.
    #[error(transparent)]
    Playlist(#[from] PlaylistError),
}

/// Applies `action` to `state` and returns the side effects to run.
///
/// # Errors
///
/// Returns [`PlayerError::TornDown`] for any action other than [`PlayerAction::Teardown`] after
/// teardown, and [`PlayerError::Playlist`] when a selection names an unknown item. `state` is
/// unchanged when an error is returned.
pub fn reduce_player(
    state: &mut PlayerState,
    action: PlayerAction,
) -> Result<Vec<PlayerEffect>, PlayerError> {
    if state.torn_down {
        return match action {
            PlayerAction::Teardown => Ok(Vec::new()),
            _ => Err(PlayerError::TornDown),
        };
    }

    let mut effects = Vec::new();
    match action {
        PlayerAction::LoadRequested => {
            if !state.loading {
                state.loading = true;
                state.playlist.mark_loading();
                effects.push(PlayerEffect::FetchCollection);
            }
        }
        PlayerAction::LoadFinished(load) => {
            state.loading = false;
            state.playlist = load.state;
            state.notice = load.notice;
            sync_player(state, &mut effects);
        }
        PlayerAction::ToggleWidget => {
            if state.has_started {
                state.is_expanded = !state.is_expanded;
                if !state.is_expanded {
                    state.show_playlist = false;
                }
            } else {
                start_widget(state, &mut effects);
            }
        }
        PlayerAction::TogglePlaylist => {
            state.show_playlist = !state.show_playlist;
        }
        PlayerAction::TogglePlayback => {
            if state.player_ready {
                effects.push(if state.is_playing {
                    PlayerEffect::Pause
                } else {
                    PlayerEffect::Play
                });
            }
        }
        PlayerAction::Next => {
            state.playlist.advance();
            sync_player(state, &mut effects);
        }
        PlayerAction::Select { identifier } => {
            state.playlist.select(&identifier)?;
            state.show_playlist = false;
            if state.has_started {
                sync_player(state, &mut effects);
            } else {
                start_widget(state, &mut effects);
            }
        }
        PlayerAction::PlayerReady => {
            state.player_ready = true;
            sync_player(state, &mut effects);
            if effects.is_empty() {
                effects.push(PlayerEffect::Play);
            }
        }
        PlayerAction::PlaybackStarted => state.is_playing = true,
        PlayerAction::PlaybackPaused => state.is_playing = false,
        PlayerAction::PlaybackEnded => {
            state.is_playing = false;
            state.playlist.advance();
            sync_player(state, &mut effects);
        }
        PlayerAction::PlayerUnavailable { reason: _ } => {
            // The next toggle retries the acquire.
            state.has_started = false;
            state.player_ready = false;
            state.is_playing = false;
            state.player_item = None;
            state.notice = Some(PLAYER_UNAVAILABLE_NOTICE.to_string());
        }
        PlayerAction::Teardown => {
            state.torn_down = true;
            state.player_ready = false;
            state.is_playing = false;
            state.player_item = None;
            effects.push(PlayerEffect::ReleasePlayer);
        }
    }

    Ok(effects)
}

fn start_widget(state: &mut PlayerState, effects: &mut Vec<PlayerEffect>) {
    let identifier = state.playlist.current().identifier.clone();
    state.has_started = true;
    state.is_expanded = true;
    state.player_item = Some(identifier.clone());
    effects.push(PlayerEffect::AcquirePlayer { identifier });
}

// Keeps the embed on the playlist's current item once it is live.
fn sync_player(state: &mut PlayerState, effects: &mut Vec<PlayerEffect>) {
    if !state.has_started || !state.player_ready {
        return;
    }
    let identifier = &state.playlist.current().identifier;
    if state.player_item.as_deref() == Some(identifier.as_str()) {
        return;
    }
    state.player_item = Some(identifier.clone());
    effects.push(PlayerEffect::LoadItem {
        identifier: identifier.clone(),
    });
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{LoadStatus, MediaItem, PlaylistState, FALLBACK_ITEM_ID};

    fn item(identifier: &str) -> MediaItem {
        MediaItem {
            identifier: identifier.to_string(),
            title: identifier.to_uppercase(),
            attribution: "Artist".to_string(),
            thumbnail_url: String::new(),
            duration_seconds: Some(60),
        }
    }

    fn loaded(ids: &[&str]) -> PlaylistLoad {
        PlaylistLoad {
            state: PlaylistState::from_items(ids.iter().map(|id| item(id)).collect(), ids.len())
                .expect("items"),
            notice: None,
        }
    }

    fn reduce(state: &mut PlayerState, action: PlayerAction) -> Vec<PlayerEffect> {
        reduce_player(state, action).expect("reducer action")
    }

    fn live_player(ids: &[&str]) -> PlayerState {
        let mut state = PlayerState::default();
        reduce(&mut state, PlayerAction::LoadFinished(loaded(ids)));
        reduce(&mut state, PlayerAction::ToggleWidget);
        reduce(&mut state, PlayerAction::PlayerReady);
        reduce(&mut state, PlayerAction::PlaybackStarted);
        state
    }

    #[test]
    fn load_requested_is_ignored_while_in_flight() {
        let mut state = PlayerState::default();
        assert_eq!(
            reduce(&mut state, PlayerAction::LoadRequested),
            vec![PlayerEffect::FetchCollection]
        );
        assert_eq!(state.playlist.load_status(), LoadStatus::Loading);
        assert!(reduce(&mut state, PlayerAction::LoadRequested).is_empty());
    }

    #[test]
    fn first_toggle_starts_and_acquires_current_item() {
        let mut state = PlayerState::default();
        reduce(&mut state, PlayerAction::LoadFinished(loaded(&["a", "b"])));
        let effects = reduce(&mut state, PlayerAction::ToggleWidget);
        assert_eq!(
            effects,
            vec![PlayerEffect::AcquirePlayer {
                identifier: "a".to_string()
            }]
        );
        assert!(state.has_started);
        assert!(state.is_expanded);
    }

    #[test]
    fn later_toggles_collapse_and_close_playlist_panel() {
        let mut state = live_player(&["a"]);
        reduce(&mut state, PlayerAction::TogglePlaylist);
        assert!(state.show_playlist);
        assert!(reduce(&mut state, PlayerAction::ToggleWidget).is_empty());
        assert!(!state.is_expanded);
        assert!(!state.show_playlist);
        reduce(&mut state, PlayerAction::ToggleWidget);
        assert!(state.is_expanded);
    }

    #[test]
    fn playback_toggle_waits_for_ready_player() {
        let mut state = PlayerState::default();
        reduce(&mut state, PlayerAction::ToggleWidget);
        assert!(reduce(&mut state, PlayerAction::TogglePlayback).is_empty());

        assert_eq!(
            reduce(&mut state, PlayerAction::PlayerReady),
            vec![PlayerEffect::Play]
        );
        reduce(&mut state, PlayerAction::PlaybackStarted);
        assert_eq!(
            reduce(&mut state, PlayerAction::TogglePlayback),
            vec![PlayerEffect::Pause]
        );
        reduce(&mut state, PlayerAction::PlaybackPaused);
        assert_eq!(
            reduce(&mut state, PlayerAction::TogglePlayback),
            vec![PlayerEffect::Play]
        );
    }

    #[test]
    fn ended_item_advances_with_wraparound() {
        let mut state = live_player(&["a", "b"]);
        assert_eq!(
            reduce(&mut state, PlayerAction::PlaybackEnded),
            vec![PlayerEffect::LoadItem {
                identifier: "b".to_string()
            }]
        );
        assert!(!state.is_playing);
        assert_eq!(
            reduce(&mut state, PlayerAction::Next),
            vec![PlayerEffect::LoadItem {
                identifier: "a".to_string()
            }]
        );
    }

    #[test]
    fn next_before_player_is_ready_only_moves_position() {
        let mut state = PlayerState::default();
        reduce(&mut state, PlayerAction::LoadFinished(loaded(&["a", "b"])));
        assert!(reduce(&mut state, PlayerAction::Next).is_empty());
        assert_eq!(state.playlist.current().identifier, "b");
    }

    #[test]
    fn ready_player_catches_up_with_items_changed_during_startup() {
        let mut state = PlayerState::default();
        reduce(&mut state, PlayerAction::ToggleWidget);
        assert_eq!(state.player_item.as_deref(), Some(FALLBACK_ITEM_ID));
        reduce(&mut state, PlayerAction::LoadFinished(loaded(&["a", "b"])));
        assert_eq!(
            reduce(&mut state, PlayerAction::PlayerReady),
            vec![PlayerEffect::LoadItem {
                identifier: "a".to_string()
            }]
        );
    }

    #[test]
    fn select_starts_widget_and_closes_playlist_panel() {
        let mut state = PlayerState::default();
        reduce(&mut state, PlayerAction::LoadFinished(loaded(&["a", "b", "c"])));
        reduce(&mut state, PlayerAction::TogglePlaylist);
        let effects = reduce(
            &mut state,
            PlayerAction::Select {
                identifier: "c".to_string(),
            },
        );
        assert_eq!(
            effects,
            vec![PlayerEffect::AcquirePlayer {
                identifier: "c".to_string()
            }]
        );
        assert!(!state.show_playlist);
        assert_eq!(state.playlist.current_index(), 2);
    }

    #[test]
    fn select_unknown_item_is_rejected_without_changes() {
        let mut state = live_player(&["a", "b"]);
        state.show_playlist = true;
        let before = state.clone();
        let err = reduce_player(
            &mut state,
            PlayerAction::Select {
                identifier: "missing".to_string(),
            },
        )
        .expect_err("unknown item");
        assert_eq!(
            err,
            PlayerError::Playlist(PlaylistError::UnknownItem {
                identifier: "missing".to_string()
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn load_finished_replaces_collection_and_reloads_live_player() {
        let mut state = live_player(&["a", "b"]);
        reduce(&mut state, PlayerAction::Next);
        let fallback = PlaylistLoad {
            state: PlaylistState::fallback(LoadStatus::Failed),
            notice: Some("Failed to load playlist".to_string()),
        };
        assert_eq!(
            reduce(&mut state, PlayerAction::LoadFinished(fallback)),
            vec![PlayerEffect::LoadItem {
                identifier: FALLBACK_ITEM_ID.to_string()
            }]
        );
        assert_eq!(state.playlist.current_index(), 0);
        assert_eq!(state.notice.as_deref(), Some("Failed to load playlist"));
        assert!(!state.loading);
    }

    #[test]
    fn unavailable_player_sets_notice() {
        let mut state = PlayerState::default();
        reduce(&mut state, PlayerAction::ToggleWidget);
        reduce(
            &mut state,
            PlayerAction::PlayerUnavailable {
                reason: "blocked".to_string(),
            },
        );
        assert!(!state.player_ready);
        assert!(!state.has_started);
        assert!(state.is_expanded);
        assert_eq!(state.notice.as_deref(), Some(PLAYER_UNAVAILABLE_NOTICE));

        assert_eq!(
            reduce(&mut state, PlayerAction::ToggleWidget),
            vec![PlayerEffect::AcquirePlayer {
                identifier: FALLBACK_ITEM_ID.to_string()
            }]
        );
        assert!(state.has_started);
    }

    #[test]
    fn teardown_releases_once_and_rejects_later_actions() {
        let mut state = live_player(&["a"]);
        assert_eq!(
            reduce(&mut state, PlayerAction::Teardown),
            vec![PlayerEffect::ReleasePlayer]
        );
        assert!(reduce(&mut state, PlayerAction::Teardown).is_empty());
        assert!(!state.player_ready);
        assert_eq!(
            reduce_player(&mut state, PlayerAction::PlaybackEnded),
            Err(PlayerError::TornDown)
        );
        assert_eq!(
            reduce_player(&mut state, PlayerAction::LoadFinished(loaded(&["z"]))),
            Err(PlayerError::TornDown)
        );
    }
}

use super::*;

use crate::{
    model::{LoadStatus, MediaItem, PlayerState},
    reducer::PlayerAction,
};

fn playback_label(state: &PlayerState) -> &'static str {
    if state.is_playing {
        "Pause"
    } else {
        "Play"
    }
}

fn collection_summary(state: &PlayerState) -> String {
    match state.playlist.load_status() {
        LoadStatus::Loading => "Loading playlist…".to_string(),
        _ => format!(
            "{} of {}",
            state.playlist.current_index() + 1,
            state.playlist.total_count()
        ),
    }
}

#[component]
pub(super) fn MusicPlayer() -> impl IntoView {
    let runtime = use_portfolio_runtime();
    let player_config = &runtime.host.get_value().config().player;
    let state = runtime.player;
    let dispatch = runtime.dispatch;

    let current = create_memo(move |_| state.with(|state| state.playlist.current().clone()));
    let expanded = move || state.with(|state| state.is_expanded);

    view! {
        <div
            class="hero-video-layer"
            style:opacity=player_config.overlay_opacity.to_string()
            aria-hidden="true"
        >
            <div id=player_config.mount_id.clone()></div>
        </div>
        <aside class="music-widget" class:music-widget-expanded=expanded>
            <button
                class="music-widget-toggle"
                aria-label=move || { if expanded() { "Collapse player" } else { "Open player" } }
                on:click=move |_| dispatch.call(PlayerAction::ToggleWidget)
            >
                "♪"
            </button>
            <Show when=expanded>
                <div class="music-widget-panel">
                    {move || {
                        state
                            .with(|state| state.notice.clone())
                            .map(|notice| view! { <p class="music-widget-notice">{notice}</p> })
                    }}
                    <NowPlaying item=current />
                    <p class="music-widget-position">{move || state.with(collection_summary)}</p>
                    <div class="music-widget-controls">
                        <button
                            disabled=move || !state.with(|state| state.player_ready)
                            on:click=move |_| dispatch.call(PlayerAction::TogglePlayback)
                        >
                            {move || state.with(playback_label)}
                        </button>
                        <button on:click=move |_| dispatch.call(PlayerAction::Next)>"Next"</button>
                        <button
                            aria-pressed=move || state.with(|state| state.show_playlist).to_string()
                            on:click=move |_| dispatch.call(PlayerAction::TogglePlaylist)
                        >
                            "Playlist"
                        </button>
                        <button
                            disabled=move || state.with(|state| state.loading)
                            on:click=move |_| dispatch.call(PlayerAction::LoadRequested)
                        >
                            "Refresh"
                        </button>
                    </div>
                    <Show when=move || state.with(|state| state.show_playlist)>
                        <PlaylistPanel />
                    </Show>
                </div>
            </Show>
        </aside>
    }
}

#[component]
fn NowPlaying(item: Memo<MediaItem>) -> impl IntoView {
    view! {
        <div class="music-now-playing">
            <Show when=move || item.with(|item| !item.thumbnail_url.is_empty())>
                <img src=move || item.with(|item| item.thumbnail_url.clone()) alt="" />
            </Show>
            <div>
                <p class="music-title">{move || item.with(|item| item.title.clone())}</p>
                <p class="music-attribution">
                    {move || item.with(|item| item.attribution.clone())}
                </p>
            </div>
        </div>
    }
}

#[component]
fn PlaylistPanel() -> impl IntoView {
    let runtime = use_portfolio_runtime();
    let state = runtime.player;
    let items = create_memo(move |_| {
        state.with(|state| {
            let current = state.playlist.current_index();
            state
                .playlist
                .items()
                .iter()
                .cloned()
                .enumerate()
                .map(|(index, item)| (index == current, item))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <ol class="music-playlist">
            <For
                each=move || items.get()
                key=|(active, item)| (item.identifier.clone(), *active)
                children=move |(active, item)| {
                    let identifier = item.identifier.clone();
                    let duration = item.duration_label();
                    view! {
                        <li class:music-playlist-active=active>
                            <button on:click=move |_| {
                                runtime
                                    .dispatch_action(PlayerAction::Select {
                                        identifier: identifier.clone(),
                                    })
                            }>
                                <span class="music-title">{item.title}</span>
                                <span class="music-attribution">{item.attribution}</span>
                                <span class="music-duration">{duration}</span>
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_position_or_loading() {
        let mut state = PlayerState::default();
        assert_eq!(collection_summary(&state), "1 of 1");
        state.playlist.mark_loading();
        assert_eq!(collection_summary(&state), "Loading playlist…");
        assert_eq!(playback_label(&state), "Play");
        state.is_playing = true;
        assert_eq!(playback_label(&state), "Pause");
    }
}

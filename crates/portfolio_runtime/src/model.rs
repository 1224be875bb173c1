//! Playlist and player state models.

use thiserror::Error;

/// Identifier of the built-in item used when the catalog cannot be loaded.
pub const FALLBACK_ITEM_ID: &str = "byvSTnxddN4";

/// One playable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// Catalog identifier passed to the embedded player.
    pub identifier: String,
    /// Cleaned display title.
    pub title: String,
    /// Cleaned artist or channel name.
    pub attribution: String,
    /// Thumbnail URL, possibly empty.
    pub thumbnail_url: String,
    /// Length in seconds when the catalog reported one.
    pub duration_seconds: Option<u32>,
}

impl MediaItem {
    /// Built-in item shown when the catalog is empty or unreachable.
    pub fn fallback() -> Self {
        Self {
            identifier: FALLBACK_ITEM_ID.to_string(),
            title: "Aesthetic Vibes".to_string(),
            attribution: "Chill Music".to_string(),
            thumbnail_url: format!("https://img.youtube.com/vi/{FALLBACK_ITEM_ID}/mqdefault.jpg"),
            duration_seconds: None,
        }
    }

    /// Display duration, or an empty string when unknown.
    pub fn duration_label(&self) -> String {
        self.duration_seconds
            .map(crate::duration::format_duration_seconds)
            .unwrap_or_default()
    }
}

/// Playlist load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// No load has been requested.
    Idle,
    /// A load is in flight.
    Loading,
    /// Items came from the catalog.
    Loaded,
    /// The catalog could not be used and the fallback item is active.
    Failed,
}

/// Playlist navigation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    /// No item with this identifier is in the playlist.
    #[error("no playlist item with identifier `{identifier}`")]
    UnknownItem {
        /// Requested identifier.
        identifier: String,
    },
}

/// Ordered playlist with a current position.
///
/// Always holds at least one item, and `current_index` is always in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistState {
    items: Vec<MediaItem>,
    current_index: usize,
    load_status: LoadStatus,
    total_count: usize,
}

impl Default for PlaylistState {
    fn default() -> Self {
        Self::fallback(LoadStatus::Idle)
    }
}

impl PlaylistState {
    /// Single-item playlist holding the built-in fallback item.
    pub fn fallback(load_status: LoadStatus) -> Self {
        Self {
            items: vec![MediaItem::fallback()],
            current_index: 0,
            load_status,
            total_count: 1,
        }
    }

    /// Loaded playlist starting at the first item. Returns `None` for an empty list.
    ///
    /// `total_count` is the catalog-reported size and may exceed the fetched items.
    pub fn from_items(items: Vec<MediaItem>, total_count: usize) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        let total_count = total_count.max(items.len());
        Some(Self {
            items,
            current_index: 0,
            load_status: LoadStatus::Loaded,
            total_count,
        })
    }

    /// Items in playback order.
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Position of the current item.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Current item.
    pub fn current(&self) -> &MediaItem {
        &self.items[self.current_index]
    }

    /// Load lifecycle status.
    pub fn load_status(&self) -> LoadStatus {
        self.load_status
    }

    /// Marks a load as in flight without touching the items.
    pub fn mark_loading(&mut self) {
        self.load_status = LoadStatus::Loading;
    }

    /// Catalog-reported size of the collection.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Moves to the next item, wrapping to the first after the last.
    pub fn advance(&mut self) -> &MediaItem {
        self.current_index = (self.current_index + 1) % self.items.len();
        self.current()
    }

    /// Makes the item with `identifier` current.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::UnknownItem`] and leaves the position unchanged when no item
    /// matches.
    pub fn select(&mut self, identifier: &str) -> Result<&MediaItem, PlaylistError> {
        let index = self
            .items
            .iter()
            .position(|item| item.identifier == identifier)
            .ok_or_else(|| PlaylistError::UnknownItem {
                identifier: identifier.to_string(),
            })?;
        self.current_index = index;
        Ok(self.current())
    }
}

/// Outcome of a playlist load, with an optional user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistLoad {
    /// Playlist to install.
    pub state: PlaylistState,
    /// Notice shown in the player widget when the load fell back.
    pub notice: Option<String>,
}

/// Hero player widget state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Active playlist.
    pub playlist: PlaylistState,
    /// Notice about the last load, if any.
    pub notice: Option<String>,
    /// Whether the user has started playback at least once.
    pub has_started: bool,
    /// Whether the embed reports playback.
    pub is_playing: bool,
    /// Whether the widget panel is expanded.
    pub is_expanded: bool,
    /// Whether the playlist list is shown inside the panel.
    pub show_playlist: bool,
    /// Whether the embed finished initializing.
    pub player_ready: bool,
    /// Whether a playlist load is in flight.
    pub loading: bool,
    /// Item currently loaded into the embed.
    pub player_item: Option<String>,
    /// Whether the widget was torn down.
    pub torn_down: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            playlist: PlaylistState::default(),
            notice: None,
            has_started: false,
            is_playing: false,
            is_expanded: false,
            show_playlist: false,
            player_ready: false,
            loading: false,
            player_item: None,
            torn_down: false,
        }
    }
}

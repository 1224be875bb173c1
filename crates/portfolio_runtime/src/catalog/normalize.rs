//! Raw catalog entry cleanup into [`MediaItem`] values.

use std::collections::HashMap;

use crate::{duration::parse_duration_token, model::MediaItem};

use super::wire::Snippet;

const ARTIST_SEPARATOR: &str = " - ";
const UNTITLED: &str = "Untitled";
const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Splits a raw title into `(attribution, title)` and cleans both.
///
/// `"Artist - Song (Remix)"` becomes `("Artist", "Song")`. Without a separator the owner name is
/// used as the attribution.
pub fn split_title(raw_title: &str, owner: Option<&str>) -> (String, String) {
    let (attribution, title) = match raw_title.split_once(ARTIST_SEPARATOR) {
        Some((artist, rest)) => (artist.trim(), rest.trim()),
        None => (owner.unwrap_or(UNKNOWN_ARTIST), raw_title),
    };

    let title = strip_trailing_group(strip_trailing_group(title, '(', ')'), '[', ']');
    let attribution = strip_suffix_word(strip_suffix_word(attribution, "- Topic"), "VEVO");

    (
        non_empty_or(attribution, UNKNOWN_ARTIST),
        non_empty_or(title, UNTITLED),
    )
}

// Cuts at the first `open` when the text (ignoring trailing whitespace) ends with `close`.
fn strip_trailing_group(text: &str, open: char, close: char) -> &str {
    let trimmed = text.trim_end();
    if !trimmed.ends_with(close) {
        return text;
    }
    match trimmed.find(open) {
        Some(index) => trimmed[..index].trim_end(),
        None => text,
    }
}

fn strip_suffix_word<'a>(text: &'a str, suffix: &str) -> &'a str {
    text.trim_end()
        .strip_suffix(suffix)
        .map(str::trim_end)
        .unwrap_or(text)
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Builds a [`MediaItem`] from a collection snippet, or `None` when it lacks an identifier.
pub(crate) fn normalize_entry(
    snippet: &Snippet,
    durations: &HashMap<String, u32>,
) -> Option<MediaItem> {
    let identifier = snippet.identifier()?.to_string();
    let (attribution, title) = split_title(
        snippet.title.as_deref().unwrap_or_default(),
        snippet
            .video_owner_channel_title
            .as_deref()
            .filter(|owner| !owner.trim().is_empty()),
    );
    let duration_seconds = durations.get(&identifier).copied();
    Some(MediaItem {
        thumbnail_url: snippet.thumbnail_url().to_string(),
        identifier,
        title,
        attribution,
        duration_seconds,
    })
}

/// Maps identifiers to parsed durations, skipping unparseable tokens.
pub(crate) fn duration_index(details: &super::wire::DetailsPage) -> HashMap<String, u32> {
    details
        .items
        .iter()
        .filter_map(|entry| {
            let id = entry.id.clone()?;
            let token = entry.content_details.as_ref()?.duration.as_deref()?;
            Some((id, parse_duration_token(token)?))
        })
        .collect()
}

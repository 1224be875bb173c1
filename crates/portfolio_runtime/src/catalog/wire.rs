//! Catalog API response payloads. Every field is optional on the wire.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CollectionPage {
    #[serde(default)]
    pub items: Vec<CollectionEntry>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageInfo {
    #[serde(default)]
    pub total_results: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct CollectionEntry {
    #[serde(default)]
    pub snippet: Option<Snippet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Snippet {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub video_owner_channel_title: Option<String>,
    #[serde(default)]
    pub resource_id: Option<ResourceId>,
    #[serde(default)]
    pub thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResourceId {
    #[serde(default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Thumbnails {
    #[serde(default)]
    pub default: Option<Thumbnail>,
    #[serde(default)]
    pub medium: Option<Thumbnail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Thumbnail {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct DetailsPage {
    #[serde(default)]
    pub items: Vec<DetailsEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DetailsEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub content_details: Option<ContentDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ContentDetails {
    #[serde(default)]
    pub duration: Option<String>,
}

impl Snippet {
    pub(crate) fn identifier(&self) -> Option<&str> {
        self.resource_id
            .as_ref()
            .and_then(|resource| resource.video_id.as_deref())
            .filter(|id| !id.trim().is_empty())
    }

    pub(crate) fn thumbnail_url(&self) -> &str {
        let Some(thumbnails) = self.thumbnails.as_ref() else {
            return "";
        };
        [thumbnails.medium.as_ref(), thumbnails.default.as_ref()]
            .into_iter()
            .flatten()
            .find_map(|thumbnail| thumbnail.url.as_deref().filter(|url| !url.is_empty()))
            .unwrap_or("")
    }
}

//! Remote collection loading with bounded retry and fallback substitution.
//!
//! [`CatalogClient::load_collection`] fetches one collection page, retrying transport and HTTP
//! failures with linear backoff, then enriches items with durations through a single
//! best-effort lookup. [`CatalogClient::load_collection_or_fallback`] turns every failure into
//! the built-in single-item collection plus an advisory notice, so callers always end up with a
//! playable playlist.

mod normalize;
mod wire;

use std::rc::Rc;

use leptos::logging;
use platform_host::{HttpService, TimerService};
use thiserror::Error;

use crate::model::{LoadStatus, PlaylistLoad, PlaylistState};

pub use normalize::split_title;

/// Total attempts for the collection request.
pub const MAX_FETCH_ATTEMPTS: u32 = 3;
/// Backoff step: the wait after failed attempt `n` is `n * RETRY_BACKOFF_STEP_MS`.
pub const RETRY_BACKOFF_STEP_MS: u32 = 1_000;
/// Notice shown when the collection came back empty.
pub const EMPTY_COLLECTION_NOTICE: &str = "No songs found in playlist";
/// Notice shown when the collection could not be loaded.
pub const LOAD_FAILED_NOTICE: &str = "Failed to load playlist";

/// Collection load failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No API credential is configured. Never retried.
    #[error("catalog API key is not configured")]
    Configuration,
    /// The host has no network access. No request is made.
    #[error("network access is unavailable on this host")]
    Offline,
    /// Every attempt failed.
    #[error("catalog unavailable after {attempts} attempts: {last_error}")]
    Unavailable {
        /// Attempts made.
        attempts: u32,
        /// Error from the final attempt.
        last_error: String,
    },
    /// The collection exists but has no playable items.
    #[error("catalog collection is empty")]
    Empty,
}

impl CatalogError {
    /// User-facing advisory shown alongside the fallback collection.
    pub fn notice(&self) -> &'static str {
        match self {
            Self::Empty => EMPTY_COLLECTION_NOTICE,
            Self::Configuration | Self::Offline | Self::Unavailable { .. } => LOAD_FAILED_NOTICE,
        }
    }

    /// Built-in collection and advisory substituted for this failure.
    pub fn fallback_load(&self) -> PlaylistLoad {
        PlaylistLoad {
            state: PlaylistState::fallback(LoadStatus::Failed),
            notice: Some(self.notice().to_string()),
        }
    }
}

/// Catalog base URL and credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEndpoint {
    base_url: String,
    api_key: Option<String>,
}

impl CatalogEndpoint {
    /// Creates an endpoint. A blank key is treated as missing.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    fn collection_url(&self, key: &str, collection_id: &str, max_items: u32) -> String {
        format!(
            "{}/playlistItems?part=snippet&playlistId={}&maxResults={}&key={}",
            self.base_url,
            urlencoding::encode(collection_id),
            max_items,
            urlencoding::encode(key)
        )
    }

    fn details_url(&self, key: &str, identifiers: &[&str]) -> String {
        format!(
            "{}/videos?part=contentDetails&id={}&key={}",
            self.base_url,
            urlencoding::encode(&identifiers.join(",")),
            urlencoding::encode(key)
        )
    }
}

/// Loads collections through injected HTTP and timer services.
#[derive(Clone)]
pub struct CatalogClient {
    http: Rc<dyn HttpService>,
    timers: Rc<dyn TimerService>,
    endpoint: CatalogEndpoint,
}

impl CatalogClient {
    /// Creates a client.
    pub fn new(
        http: Rc<dyn HttpService>,
        timers: Rc<dyn TimerService>,
        endpoint: CatalogEndpoint,
    ) -> Self {
        Self {
            http,
            timers,
            endpoint,
        }
    }

    /// Loads up to `max_items` entries of `collection_id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Configuration`] without any request when no key is configured,
    /// [`CatalogError::Unavailable`] after [`MAX_FETCH_ATTEMPTS`] failed attempts, and
    /// [`CatalogError::Empty`] when the collection has no usable entries.
    pub async fn load_collection(
        &self,
        collection_id: &str,
        max_items: u32,
    ) -> Result<PlaylistState, CatalogError> {
        let key = self
            .endpoint
            .api_key
            .as_deref()
            .ok_or(CatalogError::Configuration)?;

        let url = self.endpoint.collection_url(key, collection_id, max_items);
        let page: wire::CollectionPage = self.fetch_with_retry(&url).await?;

        let snippets: Vec<&wire::Snippet> = page
            .items
            .iter()
            .filter_map(|entry| entry.snippet.as_ref())
            .filter(|snippet| snippet.identifier().is_some())
            .collect();
        if snippets.is_empty() {
            return Err(CatalogError::Empty);
        }

        let identifiers: Vec<&str> = snippets
            .iter()
            .filter_map(|snippet| snippet.identifier())
            .collect();
        let durations = match self.fetch_details(key, &identifiers).await {
            Ok(details) => normalize::duration_index(&details),
            Err(err) => {
                logging::warn!("catalog duration lookup failed: {err}");
                Default::default()
            }
        };

        let items: Vec<_> = snippets
            .into_iter()
            .filter_map(|snippet| normalize::normalize_entry(snippet, &durations))
            .collect();
        let reported = page
            .page_info
            .and_then(|info| info.total_results)
            .and_then(|total| usize::try_from(total).ok())
            .unwrap_or(items.len());

        PlaylistState::from_items(items, reported).ok_or(CatalogError::Empty)
    }

    /// Loads a collection, substituting the built-in collection on any failure.
    pub async fn load_collection_or_fallback(
        &self,
        collection_id: &str,
        max_items: u32,
    ) -> PlaylistLoad {
        match self.load_collection(collection_id, max_items).await {
            Ok(state) => PlaylistLoad {
                state,
                notice: None,
            },
            Err(err) => {
                logging::warn!("using fallback collection: {err}");
                err.fallback_load()
            }
        }
    }

    async fn fetch_with_retry<T>(&self, url: &str) -> Result<T, CatalogError>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut last_error = String::new();
        for attempt in 1..=MAX_FETCH_ATTEMPTS {
            match self.fetch_once(url).await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    logging::warn!("catalog request failed (attempt {attempt}): {err}");
                    last_error = err;
                }
            }
            if attempt < MAX_FETCH_ATTEMPTS {
                self.timers.sleep(attempt * RETRY_BACKOFF_STEP_MS).await;
            }
        }
        Err(CatalogError::Unavailable {
            attempts: MAX_FETCH_ATTEMPTS,
            last_error,
        })
    }

    async fn fetch_once<T>(&self, url: &str) -> Result<T, String>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.http.get_text(url).await?;
        if !response.is_success() {
            return Err(format!("HTTP error status {}", response.status));
        }
        serde_json::from_str(&response.body).map_err(|err| format!("malformed response: {err}"))
    }

    async fn fetch_details(
        &self,
        key: &str,
        identifiers: &[&str],
    ) -> Result<wire::DetailsPage, String> {
        let url = self.endpoint.details_url(key, identifiers);
        self.fetch_once(&url).await
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{HttpResponse, MemoryHttpService, RecordingTimerService};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::FALLBACK_ITEM_ID;

    const COLLECTION: &str = "PLtest";

    struct Harness {
        http: MemoryHttpService,
        timers: RecordingTimerService,
        client: CatalogClient,
    }

    fn harness(api_key: Option<&str>) -> Harness {
        let http = MemoryHttpService::default();
        let timers = RecordingTimerService::default();
        let client = CatalogClient::new(
            Rc::new(http.clone()),
            Rc::new(timers.clone()),
            CatalogEndpoint::new("https://catalog.test/v3/", api_key.map(str::to_string)),
        );
        Harness {
            http,
            timers,
            client,
        }
    }

    fn collection_body() -> String {
        serde_json::json!({
            "items": [
                {"snippet": {
                    "title": "Artist - Song (Remix)",
                    "videoOwnerChannelTitle": "Uploader",
                    "resourceId": {"videoId": "v1"},
                    "thumbnails": {
                        "default": {"url": "https://img/v1/default.jpg"},
                        "medium": {"url": "https://img/v1/medium.jpg"}
                    }
                }},
                {"snippet": {
                    "title": "Quiet Track",
                    "videoOwnerChannelTitle": "SomeChannel - Topic",
                    "resourceId": {"videoId": "v2"}
                }}
            ],
            "pageInfo": {"totalResults": 12}
        })
        .to_string()
    }

    fn details_body() -> String {
        serde_json::json!({
            "items": [
                {"id": "v1", "contentDetails": {"duration": "PT4M13S"}},
                {"id": "v2", "contentDetails": {"duration": "bogus"}}
            ]
        })
        .to_string()
    }

    fn ok(body: String) -> Result<HttpResponse, String> {
        Ok(HttpResponse::new(200, body))
    }

    #[test]
    fn loads_and_normalizes_collection() {
        let h = harness(Some("secret"));
        h.http.respond("/playlistItems?", ok(collection_body()));
        h.http.respond("/videos?", ok(details_body()));

        let state = block_on(h.client.load_collection(COLLECTION, 50)).expect("loaded");
        assert_eq!(state.load_status(), LoadStatus::Loaded);
        assert_eq!(state.total_count(), 12);
        assert_eq!(state.current_index(), 0);

        let first = &state.items()[0];
        assert_eq!(first.attribution, "Artist");
        assert_eq!(first.title, "Song");
        assert_eq!(first.thumbnail_url, "https://img/v1/medium.jpg");
        assert_eq!(first.duration_label(), "4:13");

        let second = &state.items()[1];
        assert_eq!(second.attribution, "SomeChannel");
        assert_eq!(second.title, "Quiet Track");
        assert_eq!(second.thumbnail_url, "");
        assert_eq!(second.duration_seconds, None);

        let requests = h.http.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(
            requests[0].url,
            "https://catalog.test/v3/playlistItems?part=snippet&playlistId=PLtest&maxResults=50&key=secret"
        );
        assert_eq!(
            requests[1].url,
            "https://catalog.test/v3/videos?part=contentDetails&id=v1%2Cv2&key=secret"
        );
        assert!(h.timers.delays().is_empty());
    }

    #[test]
    fn retries_with_linear_backoff_then_succeeds() {
        let h = harness(Some("secret"));
        h.http.respond("/playlistItems?", Err("network down".to_string()));
        h.http.respond("/playlistItems?", ok(collection_body()));
        h.http.respond("/videos?", ok(details_body()));

        let state = block_on(h.client.load_collection(COLLECTION, 10)).expect("loaded");
        assert_eq!(state.items().len(), 2);
        assert_eq!(h.timers.delays(), vec![1_000]);
    }

    #[test]
    fn three_failures_fall_back_with_advisory() {
        let h = harness(Some("secret"));
        h.http.respond("/playlistItems?", Err("network down".to_string()));
        h.http.respond("/playlistItems?", Ok(HttpResponse::new(503, "busy")));
        h.http.respond("/playlistItems?", ok("not json".to_string()));

        let err = block_on(h.client.load_collection(COLLECTION, 10)).expect_err("unavailable");
        assert!(matches!(err, CatalogError::Unavailable { attempts: 3, .. }));
        assert_eq!(h.timers.delays(), vec![1_000, 2_000]);
    }

    #[test]
    fn fallback_wrapper_substitutes_builtin_collection() {
        let h = harness(Some("secret"));
        for _ in 0..3 {
            h.http.respond("/playlistItems?", Err("offline".to_string()));
        }

        let load = block_on(h.client.load_collection_or_fallback(COLLECTION, 10));
        assert_eq!(load.state.load_status(), LoadStatus::Failed);
        assert_eq!(load.state.items().len(), 1);
        assert_eq!(load.state.current().identifier, FALLBACK_ITEM_ID);
        assert_eq!(load.notice.as_deref(), Some(LOAD_FAILED_NOTICE));
        assert_eq!(h.http.requests().len(), 3);
    }

    #[test]
    fn empty_collection_is_not_retried() {
        let h = harness(Some("secret"));
        h.http.respond(
            "/playlistItems?",
            ok(serde_json::json!({"items": []}).to_string()),
        );

        let load = block_on(h.client.load_collection_or_fallback(COLLECTION, 10));
        assert_eq!(load.notice.as_deref(), Some(EMPTY_COLLECTION_NOTICE));
        assert_eq!(load.state.current().identifier, FALLBACK_ITEM_ID);
        assert_eq!(h.http.requests().len(), 1);
        assert!(h.timers.delays().is_empty());
    }

    #[test]
    fn missing_credential_fails_without_requests() {
        for key in [None, Some("   ")] {
            let h = harness(key);
            let err = block_on(h.client.load_collection(COLLECTION, 10)).expect_err("no key");
            assert_eq!(err, CatalogError::Configuration);
            assert!(h.http.requests().is_empty());
        }
    }

    #[test]
    fn failed_duration_lookup_still_loads_items() {
        let h = harness(Some("secret"));
        h.http.respond("/playlistItems?", ok(collection_body()));
        h.http.respond("/videos?", Ok(HttpResponse::new(500, "oops")));

        let state = block_on(h.client.load_collection(COLLECTION, 10)).expect("loaded");
        assert!(state
            .items()
            .iter()
            .all(|item| item.duration_seconds.is_none()));
        assert_eq!(h.http.requests().len(), 2);
    }
}

//! HTTP host-service adapter backed by the browser `fetch` API.

use platform_host::{HttpFuture, HttpResponse, HttpService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser HTTP adapter backed by the bridge interop layer.
pub struct WebHttpService;

impl HttpService for WebHttpService {
    fn get_text<'a>(&'a self, url: &'a str) -> HttpFuture<'a, Result<HttpResponse, String>> {
        Box::pin(async move { bridge::http_get_text(url).await })
    }

    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: &'a str,
    ) -> HttpFuture<'a, Result<HttpResponse, String>> {
        Box::pin(async move { bridge::http_post_json(url, body).await })
    }
}

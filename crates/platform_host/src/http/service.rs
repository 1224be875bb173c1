//! Text-over-HTTP service contract used by catalog lookups and form relays.

use std::{
    cell::RefCell,
    collections::VecDeque,
    future::Future,
    pin::Pin,
    rc::Rc,
};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`HttpService`].
pub type HttpFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Status code and raw text body returned by a completed request.
///
/// Transport failures (DNS, CORS, offline) never produce a response; they surface as the `Err`
/// side of the service result instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body decoded as text.
    pub body: String,
}

impl HttpResponse {
    /// Builds a response from a status code and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns whether the status code is in the 2xx range.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Host service for issuing HTTP requests with text bodies.
pub trait HttpService {
    /// Issues a `GET` request and returns the response text.
    fn get_text<'a>(&'a self, url: &'a str) -> HttpFuture<'a, Result<HttpResponse, String>>;

    /// Issues a `POST` request with a JSON body.
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: &'a str,
    ) -> HttpFuture<'a, Result<HttpResponse, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// HTTP service for targets without network access. Every request fails.
pub struct NoopHttpService;

impl HttpService for NoopHttpService {
    fn get_text<'a>(&'a self, _url: &'a str) -> HttpFuture<'a, Result<HttpResponse, String>> {
        Box::pin(async { Err("network access is unavailable on this host".to_string()) })
    }

    fn post_json<'a>(
        &'a self,
        _url: &'a str,
        _body: &'a str,
    ) -> HttpFuture<'a, Result<HttpResponse, String>> {
        Box::pin(async { Err("network access is unavailable on this host".to_string()) })
    }
}

/// Request method recorded by [`MemoryHttpService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
}

/// One request observed by [`MemoryHttpService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequestRecord {
    /// Request method.
    pub method: HttpMethod,
    /// Full request URL.
    pub url: String,
    /// Request body for `POST` requests.
    pub body: Option<String>,
}

#[derive(Debug, Default)]
struct MemoryHttpInner {
    routes: Vec<(String, VecDeque<Result<HttpResponse, String>>)>,
    requests: Vec<HttpRequestRecord>,
}

#[derive(Debug, Clone, Default)]
/// Scripted in-memory HTTP service.
///
/// Responses are queued per URL fragment and consumed in order by the first route whose
/// fragment occurs in the request URL. A request with no queued response fails.
pub struct MemoryHttpService {
    inner: Rc<RefCell<MemoryHttpInner>>,
}

impl MemoryHttpService {
    /// Queues a response for requests whose URL contains `fragment`.
    pub fn respond(&self, fragment: impl Into<String>, response: Result<HttpResponse, String>) {
        let fragment = fragment.into();
        let mut inner = self.inner.borrow_mut();
        if let Some((_, queue)) = inner.routes.iter_mut().find(|(f, _)| *f == fragment) {
            queue.push_back(response);
            return;
        }
        inner.routes.push((fragment, VecDeque::from([response])));
    }

    /// Returns every request observed so far, in order.
    pub fn requests(&self) -> Vec<HttpRequestRecord> {
        self.inner.borrow().requests.clone()
    }

    fn next_response(&self, record: HttpRequestRecord) -> Result<HttpResponse, String> {
        let mut inner = self.inner.borrow_mut();
        let url = record.url.clone();
        inner.requests.push(record);
        inner
            .routes
            .iter_mut()
            .find(|(fragment, queue)| url.contains(fragment.as_str()) && !queue.is_empty())
            .and_then(|(_, queue)| queue.pop_front())
            .unwrap_or_else(|| Err(format!("no scripted response for {url}")))
    }
}

impl HttpService for MemoryHttpService {
    fn get_text<'a>(&'a self, url: &'a str) -> HttpFuture<'a, Result<HttpResponse, String>> {
        Box::pin(async move {
            self.next_response(HttpRequestRecord {
                method: HttpMethod::Get,
                url: url.to_string(),
                body: None,
            })
        })
    }

    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: &'a str,
    ) -> HttpFuture<'a, Result<HttpResponse, String>> {
        Box::pin(async move {
            self.next_response(HttpRequestRecord {
                method: HttpMethod::Post,
                url: url.to_string(),
                body: Some(body.to_string()),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_http_service_consumes_scripted_responses_in_order() {
        let http = MemoryHttpService::default();
        http.respond("/items", Err("offline".to_string()));
        http.respond("/items", Ok(HttpResponse::new(200, "{}")));
        let http_obj: &dyn HttpService = &http;

        assert_eq!(
            block_on(http_obj.get_text("https://api.test/items?id=1")),
            Err("offline".to_string())
        );
        assert_eq!(
            block_on(http_obj.get_text("https://api.test/items?id=1")),
            Ok(HttpResponse::new(200, "{}"))
        );
        assert!(block_on(http_obj.get_text("https://api.test/items?id=1")).is_err());
        assert_eq!(http.requests().len(), 3);
    }

    #[test]
    fn memory_http_service_records_post_bodies() {
        let http = MemoryHttpService::default();
        http.respond("relay", Ok(HttpResponse::new(204, "")));

        let response =
            block_on(http.post_json("https://relay.test/f/abc", "{\"a\":1}")).expect("post");
        assert!(response.is_success());
        assert_eq!(
            http.requests(),
            vec![HttpRequestRecord {
                method: HttpMethod::Post,
                url: "https://relay.test/f/abc".to_string(),
                body: Some("{\"a\":1}".to_string()),
            }]
        );
    }

    #[test]
    fn noop_http_service_always_fails() {
        let http = NoopHttpService;
        assert!(block_on(http.get_text("https://example.test")).is_err());
        assert!(block_on(http.post_json("https://example.test", "{}")).is_err());
    }

    #[test]
    fn success_range_is_2xx_only() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(299, "").is_success());
        assert!(!HttpResponse::new(304, "").is_success());
        assert!(!HttpResponse::new(503, "").is_success());
    }
}

//! HTTP-domain contracts and lightweight test adapters.

mod service;

pub use service::{
    HttpFuture, HttpMethod, HttpRequestRecord, HttpResponse, HttpService, MemoryHttpService,
    NoopHttpService,
};

use platform_host::HttpResponse;

use super::interop;

pub(crate) async fn http_get_text(url: &str) -> Result<HttpResponse, String> {
    interop::http_get_text(url).await
}

pub(crate) async fn http_post_json(url: &str, body: &str) -> Result<HttpResponse, String> {
    interop::http_post_json(url, body).await
}

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use once_cell::sync::Lazy;
use std::time::Duration;
use thiserror::Error;

/// Shared outbound HTTP client. Redirects are followed automatically, per
/// the forwarding contract; redirect hops beyond the limit surface as an
/// upstream failure.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .expect("default reqwest client configuration is buildable")
});

/// Raw upstream capture: status, every header unfiltered, body bytes.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Any failure of the outbound fetch: unresolvable host, refused
/// connection, TLS failure, non-HTTP scheme, timeout, body read error.
#[derive(Debug, Error)]
#[error("upstream fetch failed: {0}")]
pub struct UpstreamError(#[from] reqwest::Error);

/// Performs the outbound fetch. The target is used as given; it was never
/// pre-validated, so a malformed URL fails here like any network error.
pub async fn fetch(
    target: &str,
    method: &Method,
    mut headers: HeaderMap,
    body: Bytes,
    timeout: Option<Duration>,
) -> Result<UpstreamResponse, UpstreamError> {
    // The client stack owns these: Host comes from the target URL and
    // Content-Length from the actual outbound body.
    headers.remove(http::header::HOST);
    headers.remove(http::header::CONTENT_LENGTH);

    let mut request = HTTP_CLIENT.request(method.clone(), target).headers(headers);
    if let Some(timeout) = timeout {
        request = request.timeout(timeout);
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let response = request.send().await?;
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.bytes().await?;

    Ok(UpstreamResponse {
        status,
        headers,
        body,
    })
}

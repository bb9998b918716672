use crate::classify::Classified;
use crate::constants::{self, header};
use crate::forward::UpstreamResponse;
use crate::header_override::HeaderOverride;
use crate::info;
use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, StatusCode};
use indexmap::IndexMap;

use crate::result::ProxyResponse;

/// Builds the outgoing response for every admitted branch: CORS grant
/// assembly, upstream header exposure, and the informational page.
pub struct ResponseRewriter<'a> {
    request: &'a Classified,
}

impl<'a> ResponseRewriter<'a> {
    pub fn new(request: &'a Classified) -> Self {
        Self { request }
    }

    /// Forwarded branch: upstream headers plus the CORS grant, every
    /// upstream header exposed, and a verbatim JSON copy of them in
    /// `cors-received-headers`.
    pub fn forwarded(&self, upstream: UpstreamResponse) -> ProxyResponse {
        let received = received_headers(&upstream.headers);
        let expose = expose_header_value(&upstream.headers);

        let mut headers = upstream.headers;
        self.apply_grant(&mut headers);

        if let Ok(value) = HeaderValue::from_str(&expose) {
            headers.insert(
                HeaderName::from_static("access-control-expose-headers"),
                value,
            );
        }
        let serialized =
            serde_json::to_string(&received).unwrap_or_else(|_| "{}".to_owned());
        if let Ok(value) = HeaderValue::from_str(&serialized) {
            headers.insert(HeaderName::from_static("cors-received-headers"), value);
        }

        // A preflight always reports success once admitted, whatever the
        // upstream said to the OPTIONS probe, and never carries a body.
        let (status, body) = if self.request.is_preflight {
            (StatusCode::OK, Bytes::new())
        } else {
            (upstream.status, upstream.body)
        };

        ProxyResponse {
            status,
            headers,
            body,
        }
    }

    /// Preflight answered from configuration alone, without an upstream
    /// capture. Only reachable with `short_circuit_preflight` enabled.
    pub fn preflight_without_upstream(&self) -> ProxyResponse {
        let mut headers = HeaderMap::new();
        self.apply_grant(&mut headers);
        ProxyResponse {
            status: StatusCode::OK,
            headers,
            body: Bytes::new(),
        }
    }

    /// Informational branch: no target was supplied. CORS headers are still
    /// attached so browser script can read the page.
    pub fn info_page(&self, override_: &HeaderOverride) -> ProxyResponse {
        let mut headers = HeaderMap::new();
        self.apply_grant(&mut headers);
        headers.insert(
            HeaderName::from_static("content-type"),
            HeaderValue::from_static("text/plain;charset=UTF-8"),
        );
        ProxyResponse {
            status: StatusCode::OK,
            headers,
            body: Bytes::from(info::render(self.request, override_)),
        }
    }

    /// The grant set shared by every admitted branch.
    fn apply_grant(&self, headers: &mut HeaderMap) {
        let allow_origin = self
            .request
            .origin
            .as_deref()
            .and_then(|origin| HeaderValue::from_str(origin).ok())
            .unwrap_or_else(|| HeaderValue::from_static("*"));
        headers.insert(
            HeaderName::from_static("access-control-allow-origin"),
            allow_origin,
        );

        if self.request.is_preflight {
            let methods = self
                .request
                .request_method
                .as_deref()
                .and_then(|value| HeaderValue::from_str(value).ok())
                .unwrap_or_else(|| HeaderValue::from_static(constants::DEFAULT_ALLOW_METHODS));
            headers.insert(
                HeaderName::from_static("access-control-allow-methods"),
                methods,
            );

            let allow_headers = self
                .request
                .request_headers
                .as_deref()
                .and_then(|value| HeaderValue::from_str(value).ok())
                .unwrap_or_else(|| HeaderValue::from_static("*"));
            headers.insert(
                HeaderName::from_static("access-control-allow-headers"),
                allow_headers,
            );

            headers.remove(header::X_CONTENT_TYPE_OPTIONS);
            headers.insert(
                HeaderName::from_static("access-control-max-age"),
                HeaderValue::from_static(constants::PREFLIGHT_MAX_AGE),
            );
        }
    }
}

/// JSON copy of every upstream header. Duplicate values of one name are
/// joined with `", "`, matching how HTTP folds repeated headers.
fn received_headers(upstream: &HeaderMap) -> IndexMap<String, String> {
    let mut received = IndexMap::with_capacity(upstream.keys_len());
    for name in upstream.keys() {
        let joined = upstream
            .get_all(name)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect::<Vec<_>>()
            .join(", ");
        received.insert(name.as_str().to_owned(), joined);
    }
    received
}

/// Every upstream header name plus the synthetic `cors-received-headers`,
/// comma-joined, granting browser script access to all of them.
fn expose_header_value(upstream: &HeaderMap) -> String {
    let mut names: Vec<&str> = upstream.keys().map(|name| name.as_str()).collect();
    names.push(header::CORS_RECEIVED_HEADERS);
    names.join(",")
}

#[cfg(test)]
#[path = "rewrite_test.rs"]
mod rewrite_test;

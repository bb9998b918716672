use crate::classify::TargetError;
use crate::constants::{self, header};
use crate::forward::UpstreamError;
use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, StatusCode};
use thiserror::Error;

/// Transport-agnostic response produced by the engine. The server adapter
/// turns this into a hyper response; tests inspect it directly.
#[derive(Debug, Clone)]
pub struct ProxyResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ProxyResponse {
    fn terminal(status: StatusCode, content_type: &'static str, body: &'static str) -> Self {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(
            HeaderName::from_static("content-type"),
            HeaderValue::from_static(content_type),
        );
        Self {
            status,
            headers,
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    /// 400: the query component failed strict percent-decoding.
    pub fn malformed_target() -> Self {
        Self::terminal(
            StatusCode::BAD_REQUEST,
            "text/plain;charset=UTF-8",
            constants::MALFORMED_TARGET_BODY,
        )
    }

    /// 403: the admission gate rejected the request. Deliberately carries no
    /// CORS headers; a rejected caller gets no cross-origin grant.
    pub fn forbidden() -> Self {
        Self::terminal(
            StatusCode::FORBIDDEN,
            "text/html;charset=UTF-8",
            constants::FORBIDDEN_BODY,
        )
    }

    /// 502: the outbound fetch failed.
    pub fn upstream_failure() -> Self {
        Self::terminal(
            StatusCode::BAD_GATEWAY,
            "text/plain;charset=UTF-8",
            constants::UPSTREAM_FAILURE_BODY,
        )
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn has_cors_grant(&self) -> bool {
        self.headers
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    }
}

/// Error taxonomy of the pipeline. Each variant maps to exactly one fixed
/// terminal response; override parse failures are not errors at all.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("malformed target URL: {0}")]
    MalformedTarget(#[from] TargetError),
    #[error("request denied by admission policy")]
    AdmissionDenied,
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ProxyError {
    pub fn into_response(self) -> ProxyResponse {
        match self {
            Self::MalformedTarget(_) => ProxyResponse::malformed_target(),
            Self::AdmissionDenied => ProxyResponse::forbidden(),
            Self::Upstream(_) => ProxyResponse::upstream_failure(),
        }
    }
}

use crate::admission::AdmissionPolicy;
use crate::classify::classify;
use crate::context::InboundRequest;
use crate::forward;
use crate::header_filter::filtered_headers;
use crate::header_override::HeaderOverride;
use crate::options::ProxyOptions;
use crate::pattern::PatternError;
use crate::result::{ProxyError, ProxyResponse};
use crate::rewrite::ResponseRewriter;
use std::time::Duration;
use tracing::{debug, warn};

/// The proxy engine: one linear pipeline per request, no state across
/// invocations. Safe to share behind an `Arc` for unlimited concurrent
/// reads; every field is immutable after construction.
pub struct CorsProxy {
    admission: AdmissionPolicy,
    upstream_timeout: Option<Duration>,
    short_circuit_preflight: bool,
}

impl CorsProxy {
    pub fn new(options: ProxyOptions) -> Result<Self, PatternError> {
        let admission = AdmissionPolicy::compile(&options)?;
        Ok(Self {
            admission,
            upstream_timeout: options.upstream_timeout,
            short_circuit_preflight: options.short_circuit_preflight,
        })
    }

    /// Classifier -> admission gate -> (info page | fetch -> rewrite).
    /// Every failure becomes a fixed terminal response; this never panics
    /// and never leaks error internals to the caller.
    pub async fn handle(&self, request: InboundRequest) -> ProxyResponse {
        match self.try_handle(request).await {
            Ok(response) => response,
            Err(err) => {
                match &err {
                    ProxyError::Upstream(_) => warn!(error = %err, "request failed"),
                    _ => debug!(error = %err, "request rejected"),
                }
                err.into_response()
            }
        }
    }

    async fn try_handle(&self, request: InboundRequest) -> Result<ProxyResponse, ProxyError> {
        let classified = classify(&request)?;

        if !self
            .admission
            .admit(&classified.target, classified.origin.as_deref())
        {
            return Err(ProxyError::AdmissionDenied);
        }

        let override_ = HeaderOverride::from_headers(&request.headers);
        if override_ == HeaderOverride::Invalid {
            // Malformed override must not abort the request.
            debug!("ignoring unparseable x-cors-headers value");
        }

        let rewriter = ResponseRewriter::new(&classified);

        if classified.target.is_empty() {
            return Ok(rewriter.info_page(&override_));
        }

        if classified.is_preflight && self.short_circuit_preflight {
            return Ok(rewriter.preflight_without_upstream());
        }

        let outbound = filtered_headers(&request.headers, &override_);
        let upstream = forward::fetch(
            &classified.target,
            &request.method,
            outbound,
            request.body,
            self.upstream_timeout,
        )
        .await?;

        Ok(rewriter.forwarded(upstream))
    }
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

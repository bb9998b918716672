use std::time::Duration;

/// Startup configuration for the proxy engine.
///
/// The pattern lists are compiled once when [`crate::CorsProxy::new`] is
/// called and never mutated afterwards, so concurrent request handling only
/// ever observes read-only configuration.
#[derive(Clone, Debug)]
pub struct ProxyOptions {
    /// Target URLs matching any of these patterns are rejected with 403.
    /// Patterns use regex search semantics (hit anywhere, case-insensitive).
    pub blacklist: Vec<String>,
    /// `Origin` header values matching any of these patterns are admitted.
    /// A request without an `Origin` header is always admitted; that
    /// permissive default keeps non-browser clients working and is a
    /// deliberate policy point, not an oversight.
    pub whitelist: Vec<String>,
    /// Abort the upstream fetch after this long. `None` preserves the
    /// reference behavior: if the upstream hangs, the request hangs.
    pub upstream_timeout: Option<Duration>,
    /// Answer preflights from configuration alone instead of contacting the
    /// upstream. Off by default: the reference always performs the fetch and
    /// discards the body, which some upstreams observe as traffic.
    pub short_circuit_preflight: bool,
}

impl Default for ProxyOptions {
    fn default() -> Self {
        Self {
            blacklist: Vec::new(),
            whitelist: vec![".*".to_owned()],
            upstream_timeout: None,
            short_circuit_preflight: false,
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use bytes::Bytes;
use http::{HeaderMap, Method};
use std::net::IpAddr;

/// Transport-agnostic view of one inbound request.
///
/// The server adapter builds one of these per request; tests build them
/// directly, so the whole pipeline runs without a socket.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    pub method: Method,
    /// Raw query component: everything after the first `?`, still
    /// percent-encoded. `None` when the request carried no query at all.
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
    /// Socket peer address, used when no client-IP header is present.
    pub peer_ip: Option<IpAddr>,
}

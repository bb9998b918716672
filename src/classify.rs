use crate::constants::header;
use crate::context::InboundRequest;
use http::{HeaderMap, Method};
use thiserror::Error;

/// Why the target URL could not be decoded. Both variants are terminal: the
/// caller answers 400 and nothing else runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("invalid percent escape at byte {position}")]
    InvalidEscape { position: usize },
    #[error("decoded target is not valid UTF-8")]
    InvalidUtf8,
}

/// Per-request facts extracted up front, before any admission or network
/// work happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    /// True iff the method is `OPTIONS`.
    pub is_preflight: bool,
    pub origin: Option<String>,
    pub client_ip: Option<String>,
    /// Country code attached by the hosting edge, when present.
    pub country: Option<String>,
    /// Edge/datacenter identifier, the suffix of a `CF-Ray` style header.
    pub edge: Option<String>,
    /// `Host` the caller addressed, used to render the usage hint.
    pub host: Option<String>,
    /// `access-control-request-method` value, preflights only.
    pub request_method: Option<String>,
    /// `access-control-request-headers` value, preflights only.
    pub request_headers: Option<String>,
    /// Decoded target URL. Empty when the request carried no query, which
    /// selects the informational branch. Never validated as a URL here; a
    /// bad scheme surfaces from the fetch instead.
    pub target: String,
}

pub fn classify(request: &InboundRequest) -> Result<Classified, TargetError> {
    let target = match request.query.as_deref() {
        None => String::new(),
        Some(raw) => decode_target(raw)?,
    };

    let headers = &request.headers;
    Ok(Classified {
        is_preflight: request.method == Method::OPTIONS,
        origin: header_value(headers, header::ORIGIN),
        client_ip: header_value(headers, header::CF_CONNECTING_IP)
            .or_else(|| request.peer_ip.map(|ip| ip.to_string())),
        country: header_value(headers, header::CF_IPCOUNTRY),
        edge: edge_identifier(headers),
        host: header_value(headers, http::header::HOST.as_str()),
        request_method: header_value(headers, header::ACCESS_CONTROL_REQUEST_METHOD),
        request_headers: header_value(headers, header::ACCESS_CONTROL_REQUEST_HEADERS),
        target,
    })
}

/// Strictly percent-decodes the query component as one opaque string.
///
/// The ecosystem decoders pass a lone `%` through unchanged; this contract
/// instead rejects any `%` not followed by two hex digits, mirroring what
/// `decodeURIComponent` throws on. `+` is kept literal: the query is not a
/// form-encoded key/value list.
pub fn decode_target(raw: &str) -> Result<String, TargetError> {
    let bytes = raw.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut position = 0;

    while position < bytes.len() {
        match bytes[position] {
            b'%' => {
                let high = bytes.get(position + 1).copied().and_then(hex_value);
                let low = bytes.get(position + 2).copied().and_then(hex_value);
                match (high, low) {
                    (Some(high), Some(low)) => {
                        decoded.push((high << 4) | low);
                        position += 3;
                    }
                    _ => return Err(TargetError::InvalidEscape { position }),
                }
            }
            byte => {
                decoded.push(byte);
                position += 1;
            }
        }
    }

    String::from_utf8(decoded).map_err(|_| TargetError::InvalidUtf8)
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_owned())
}

/// `CF-Ray` values look like `8f1a2b3c4d5e6f70-SJC`; the suffix names the
/// edge location that handled the request.
fn edge_identifier(headers: &HeaderMap) -> Option<String> {
    let ray = header_value(headers, header::CF_RAY)?;
    ray.rsplit_once('-').map(|(_, colo)| colo.to_owned())
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;

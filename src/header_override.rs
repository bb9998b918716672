use crate::constants::header;
use http::HeaderMap;
use indexmap::IndexMap;

/// Tri-state parse of the `x-cors-headers` request header.
///
/// The header carries a JSON object mapping header names to values, merged
/// into the outbound header set before the fetch. A malformed value must not
/// abort the request, so "present and invalid" is an explicit state rather
/// than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderOverride {
    Absent,
    Parsed(IndexMap<String, String>),
    Invalid,
}

impl HeaderOverride {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let Some(value) = headers.get(header::X_CORS_HEADERS) else {
            return Self::Absent;
        };
        let Ok(raw) = value.to_str() else {
            return Self::Invalid;
        };
        match serde_json::from_str::<IndexMap<String, String>>(raw) {
            Ok(entries) => Self::Parsed(entries),
            Err(_) => Self::Invalid,
        }
    }

    pub fn entries(&self) -> Option<&IndexMap<String, String>> {
        match self {
            Self::Parsed(entries) => Some(entries),
            Self::Absent | Self::Invalid => None,
        }
    }
}

#[cfg(test)]
#[path = "header_override_test.rs"]
mod header_override_test;

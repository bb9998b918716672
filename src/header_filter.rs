use crate::header_override::HeaderOverride;
use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;

/// Header names the proxy never forwards upstream.
///
/// `http` keeps header names lowercase, so the checks here are already
/// case-insensitive. "eferer" is a substring match on purpose: it catches
/// both the misspelled `referer` and correctly spelled `referrer` variants.
fn is_denied(name: &str) -> bool {
    name.starts_with("origin")
        || name.contains("eferer")
        || name.starts_with("cf-")
        || name.starts_with("x-forw")
        || name.starts_with("x-cors-headers")
}

/// Builds the outbound header set: incoming headers minus the deny list,
/// then the override entries merged in. An override entry replaces any
/// surviving incoming header of the same name.
pub fn filtered_headers(incoming: &HeaderMap, override_: &HeaderOverride) -> HeaderMap {
    let mut outbound = HeaderMap::with_capacity(incoming.len());
    for (name, value) in incoming {
        if is_denied(name.as_str()) {
            continue;
        }
        outbound.append(name.clone(), value.clone());
    }

    if let Some(entries) = override_.entries() {
        for (name, value) in entries {
            if let (Ok(name), Ok(value)) = (
                HeaderName::try_from(name.as_str()),
                HeaderValue::from_str(value),
            ) {
                outbound.insert(name, value);
            }
        }
    }

    outbound
}

#[cfg(test)]
#[path = "header_filter_test.rs"]
mod header_filter_test;

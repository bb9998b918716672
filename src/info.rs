use crate::classify::Classified;
use crate::header_override::HeaderOverride;
use std::fmt::Write;

/// Plain-text body for the informational branch. Rate limits are advertised
/// text only; nothing enforces them.
pub(crate) fn render(request: &Classified, override_: &HeaderOverride) -> String {
    let mut body = String::with_capacity(512);

    body.push_str("ANYCORS\n");
    body.push_str("A stateless CORS proxy. Append the target URL as the query string.\n\n");

    body.push_str("Usage:\n");
    let host = request.host.as_deref().unwrap_or("<this-host>");
    let _ = writeln!(body, "  https://{host}/?https://example.com/api");
    body.push('\n');

    body.push_str("Limits: 100,000 requests/day\n");
    body.push_str("        1,000 requests/10 minutes\n\n");

    if let Some(origin) = request.origin.as_deref() {
        let _ = writeln!(body, "Origin: {origin}");
    }
    if let Some(ip) = request.client_ip.as_deref() {
        let _ = writeln!(body, "IP: {ip}");
    }
    if let Some(country) = request.country.as_deref() {
        let _ = writeln!(body, "Country: {country}");
    }
    if let Some(edge) = request.edge.as_deref() {
        let _ = writeln!(body, "Datacenter: {edge}");
    }
    if let Some(entries) = override_.entries() {
        let echoed = serde_json::to_string(entries).unwrap_or_else(|_| "{}".to_owned());
        let _ = writeln!(body, "x-cors-headers: {echoed}");
    }

    body
}

#[cfg(test)]
#[path = "info_test.rs"]
mod info_test;

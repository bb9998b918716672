pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "access-control-request-method";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "access-control-request-headers";
    pub const ORIGIN: &str = "Origin";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";

    /// Request header carrying the caller-supplied JSON header override map.
    pub const X_CORS_HEADERS: &str = "x-cors-headers";
    /// Synthetic response header carrying a JSON copy of every upstream header.
    pub const CORS_RECEIVED_HEADERS: &str = "cors-received-headers";

    pub const CF_CONNECTING_IP: &str = "CF-Connecting-IP";
    pub const CF_IPCOUNTRY: &str = "CF-IPCountry";
    pub const CF_RAY: &str = "CF-Ray";
}

/// `Access-Control-Allow-Methods` fallback when a preflight omits
/// `access-control-request-method`.
pub const DEFAULT_ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS, HEAD";

/// `Access-Control-Max-Age` attached to every preflight answer, in seconds.
pub const PREFLIGHT_MAX_AGE: &str = "600";

pub const MALFORMED_TARGET_BODY: &str = "Malformed target URL";

pub const UPSTREAM_FAILURE_BODY: &str = "Upstream request failed";

pub const FORBIDDEN_BODY: &str = "<!DOCTYPE html>\n<html>\n<body>\n<h1>403 Forbidden</h1>\n<p>This proxy does not serve your origin or target URL.<br>\nDeploy your own instance to lift the restriction.</p>\n</body>\n</html>\n";

use anycors::{CorsProxy, InboundRequest, ProxyOptions};
use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method};

pub fn proxy() -> CorsProxy {
    proxy_with(ProxyOptions::default())
}

pub fn proxy_with(options: ProxyOptions) -> CorsProxy {
    CorsProxy::new(options).expect("valid proxy configuration")
}

pub fn request() -> RequestBuilder {
    RequestBuilder::new()
}

pub struct RequestBuilder {
    method: Method,
    query: Option<String>,
    headers: HeaderMap,
    body: Bytes,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: Method::GET,
            query: None,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn query(mut self, query: &str) -> Self {
        self.query = Some(query.to_owned());
        self
    }

    pub fn origin(self, origin: &str) -> Self {
        self.header("origin", origin)
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.append(
            HeaderName::try_from(name).expect("valid header name"),
            HeaderValue::from_str(value).expect("valid header value"),
        );
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = Bytes::from(body.to_owned());
        self
    }

    pub fn build(self) -> InboundRequest {
        InboundRequest {
            method: self.method,
            query: self.query,
            headers: self.headers,
            body: self.body,
            peer_ip: None,
        }
    }
}

pub mod constants;
pub mod server;

mod admission;
mod classify;
mod context;
mod forward;
mod header_filter;
mod header_override;
mod info;
mod options;
mod pattern;
mod proxy;
mod result;
mod rewrite;

pub use admission::AdmissionPolicy;
pub use classify::{Classified, TargetError, classify, decode_target};
pub use context::InboundRequest;
pub use forward::{UpstreamError, UpstreamResponse};
pub use header_override::HeaderOverride;
pub use options::ProxyOptions;
pub use pattern::{Pattern, PatternError, PatternList};
pub use proxy::CorsProxy;
pub use result::{ProxyError, ProxyResponse};

use crate::options::ProxyOptions;
use crate::pattern::{PatternError, PatternList};

/// The blacklist/whitelist gate, compiled once at startup.
///
/// A request is admitted iff its target URL matches no blacklist pattern and
/// its `Origin` matches some whitelist pattern. A request without an
/// `Origin` header counts as whitelisted; see
/// [`ProxyOptions::whitelist`](crate::ProxyOptions) for why.
#[derive(Debug, Clone)]
pub struct AdmissionPolicy {
    blacklist: PatternList,
    whitelist: PatternList,
}

impl AdmissionPolicy {
    pub fn compile(options: &ProxyOptions) -> Result<Self, PatternError> {
        Ok(Self {
            blacklist: PatternList::compile(&options.blacklist)?,
            whitelist: PatternList::compile(&options.whitelist)?,
        })
    }

    pub fn admit(&self, target: &str, origin: Option<&str>) -> bool {
        if self.blacklist.matches(target) {
            return false;
        }
        match origin {
            Some(origin) => self.whitelist.matches(origin),
            None => true,
        }
    }
}

#[cfg(test)]
#[path = "admission_test.rs"]
mod admission_test;

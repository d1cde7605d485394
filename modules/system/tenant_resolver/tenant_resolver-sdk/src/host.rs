//! Request boundary for tenant resolution.
//!
//! The resolver only ever reads one request field, the `host` header.
//! [`HostSource`] keeps that dependency narrow so callers can pass header
//! maps, request parts, or test doubles.

use http::HeaderMap;
use http::request::Parts;

/// Name of the header the resolver reads.
pub const HOST_HEADER: &str = "host";

/// Anything that can answer header lookups by name.
pub trait HostSource: Send + Sync {
    /// Returns the raw value of `header_name`, if present and valid UTF-8.
    fn get(&self, header_name: &str) -> Option<&str>;

    /// Shorthand for `get("host")`.
    fn host(&self) -> Option<&str> {
        self.get(HOST_HEADER)
    }
}

impl HostSource for HeaderMap {
    fn get(&self, header_name: &str) -> Option<&str> {
        HeaderMap::get(self, header_name).and_then(|v| v.to_str().ok())
    }
}

impl HostSource for Parts {
    fn get(&self, header_name: &str) -> Option<&str> {
        HostSource::get(&self.headers, header_name)
    }
}

//! Configuration for the tenant resolver gateway.

use serde::{Deserialize, Serialize};

/// Gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TenantResolverGwConfig {
    /// Read the host from `forwarded_host_header` before `host`.
    ///
    /// Enable only behind a reverse proxy that sets the header.
    pub trust_forwarded_host: bool,

    /// Header carrying the original host when running behind a proxy.
    pub forwarded_host_header: String,
}

impl Default for TenantResolverGwConfig {
    fn default() -> Self {
        Self {
            trust_forwarded_host: false,
            forwarded_host_header: "x-forwarded-host".to_owned(),
        }
    }
}

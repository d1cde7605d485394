//! Configuration for the static tenant resolver plugin.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tenant_resolver_sdk::Organization;
use uuid::Uuid;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticTrPluginConfig {
    /// Static organization definitions.
    pub organizations: Vec<OrganizationConfig>,
}

/// Configuration for a single organization.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OrganizationConfig {
    /// Organization ID.
    pub id: Uuid,

    /// Organization name, also its subdomain label.
    pub name: String,

    #[serde(default)]
    pub custom_domains: Vec<String>,

    #[serde(default)]
    pub network_ids: BTreeSet<String>,

    #[serde(default)]
    pub csv_charset: String,

    #[serde(default)]
    pub sso_cert: String,

    #[serde(default)]
    pub sso_entrypoint: String,

    #[serde(default)]
    pub sso_issuer: String,
}

impl From<&OrganizationConfig> for Organization {
    fn from(c: &OrganizationConfig) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            custom_domains: c.custom_domains.clone(),
            network_ids: c.network_ids.clone(),
            csv_charset: c.csv_charset.clone(),
            sso_cert: c.sso_cert.clone(),
            sso_entrypoint: c.sso_entrypoint.clone(),
            sso_issuer: c.sso_issuer.clone(),
        }
    }
}

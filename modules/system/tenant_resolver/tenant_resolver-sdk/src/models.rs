//! Domain models for the tenant resolver module.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an organization.
pub type OrganizationId = Uuid;

/// An organization (tenant) record.
///
/// `name` is globally unique and doubles as the subdomain label.
/// `custom_domains` entries are globally unique across organizations; the
/// store that owns the records enforces both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Unique organization identifier.
    pub id: OrganizationId,
    /// Unique organization name, used as the subdomain label.
    pub name: String,
    /// Fully-qualified hostnames registered to this organization, in
    /// registration order.
    #[serde(default)]
    pub custom_domains: Vec<String>,
    /// Networks that belong to this organization.
    #[serde(default, rename = "networkIDs")]
    pub network_ids: BTreeSet<String>,
    /// Character set used for CSV exports.
    #[serde(default)]
    pub csv_charset: String,
    /// PEM certificate of the SSO identity provider.
    #[serde(default)]
    pub sso_cert: String,
    /// SSO entry point URL.
    #[serde(default)]
    pub sso_entrypoint: String,
    /// SSO issuer.
    #[serde(default)]
    pub sso_issuer: String,
}

impl Organization {
    /// Returns `true` if `host` is one of this organization's custom domains.
    #[must_use]
    pub fn owns_custom_domain(&self, host: &str) -> bool {
        self.custom_domains.iter().any(|d| d == host)
    }

    /// Returns `true` when an SSO entry point is configured.
    #[must_use]
    pub fn sso_configured(&self) -> bool {
        !self.sso_entrypoint.is_empty()
    }
}

/// Data for creating an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrganization {
    /// Optional ID; generated when absent.
    #[serde(default)]
    pub id: Option<OrganizationId>,
    pub name: String,
    #[serde(default)]
    pub custom_domains: Vec<String>,
    #[serde(default, rename = "networkIDs")]
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

impl NewOrganization {
    /// Creates an organization record with the given ID.
    #[must_use]
    pub fn into_organization(self, id: OrganizationId) -> Organization {
        Organization {
            id,
            name: self.name,
            custom_domains: self.custom_domains,
            network_ids: self.network_ids,
            csv_charset: self.csv_charset,
            sso_cert: self.sso_cert,
            sso_entrypoint: self.sso_entrypoint,
            sso_issuer: self.sso_issuer,
        }
    }
}

//! REST DTOs for the tenant resolver.

use std::collections::BTreeSet;

use serde::Serialize;
use tenant_resolver_sdk::Organization;
use uuid::Uuid;

/// Organization as returned to the browser.
///
/// The SSO certificate body is never sent; `sso_configured` says whether
/// SSO is set up.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDto {
    pub id: Uuid,
    pub name: String,
    pub custom_domains: Vec<String>,
    #[serde(rename = "networkIDs")]
    pub network_ids: BTreeSet<String>,
    pub csv_charset: String,
    pub sso_configured: bool,
    pub sso_entrypoint: String,
    pub sso_issuer: String,
}

impl From<Organization> for OrganizationDto {
    fn from(org: Organization) -> Self {
        let sso_configured = org.sso_configured();
        Self {
            id: org.id,
            name: org.name,
            custom_domains: org.custom_domains,
            network_ids: org.network_ids,
            csv_charset: org.csv_charset,
            sso_configured,
            sso_entrypoint: org.sso_entrypoint,
            sso_issuer: org.sso_issuer,
        }
    }
}

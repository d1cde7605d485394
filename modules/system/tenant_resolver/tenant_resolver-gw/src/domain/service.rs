//! Domain service for the tenant resolver gateway.
//!
//! Resolution is read-only and keeps no state between calls, so one
//! `Service` is shared by every request.

use std::sync::Arc;

use tenant_resolver_sdk::{Organization, OrganizationStore};
use tracing::debug;

use super::error::DomainError;

/// Tenant resolver gateway service.
pub struct Service {
    store: Arc<dyn OrganizationStore>,
}

impl Service {
    #[must_use]
    pub fn new(store: Arc<dyn OrganizationStore>) -> Self {
        Self { store }
    }

    /// Resolve the organization that owns `host`.
    ///
    /// The custom-domain lookup runs first and wins outright; the name
    /// lookup on the leftmost label only runs when it misses. The two are
    /// kept as separate store calls so the precedence stays explicit.
    ///
    /// # Errors
    ///
    /// - `TenantNotFound` if neither lookup matches
    /// - `Store` if the store fails (passed through unchanged)
    #[tracing::instrument(skip_all, fields(host = %host))]
    pub async fn resolve_by_host(&self, host: &str) -> Result<Organization, DomainError> {
        if let Some(org) = self.store.find_by_custom_domain(host).await? {
            debug!(organization = %org.name, "resolved by custom domain");
            return Ok(org);
        }

        let label = subdomain_label(host);
        if let Some(org) = self.store.find_by_name(label).await? {
            debug!(organization = %org.name, label, "resolved by subdomain label");
            return Ok(org);
        }

        debug!(label, "no organization matched");
        Err(DomainError::not_found(host))
    }
}

/// Returns the leftmost label of `host`: everything before the first `.`,
/// or the whole host when it has no dot.
#[must_use]
pub fn subdomain_label(host: &str) -> &str {
    host.split_once('.').map_or(host, |(label, _)| label)
}

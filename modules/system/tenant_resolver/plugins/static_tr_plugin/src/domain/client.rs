//! Store implementation for the static tenant resolver plugin.
//!
//! Implements `OrganizationStore` using the domain service.

use async_trait::async_trait;
use tenant_resolver_sdk::{Organization, OrganizationStore, TenantResolverError};

use super::service::Service;

#[async_trait]
impl OrganizationStore for Service {
    async fn find_by_custom_domain(
        &self,
        domain: &str,
    ) -> Result<Option<Organization>, TenantResolverError> {
        Ok(self
            .by_domain
            .get(domain)
            .and_then(|name| self.by_name.get(name))
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Organization>, TenantResolverError> {
        Ok(self.by_name.get(name).cloned())
    }
}

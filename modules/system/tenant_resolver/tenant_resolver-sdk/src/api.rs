//! Public API trait for the tenant resolver gateway.
//!
//! This trait defines the interface that consumers use to map an inbound
//! request to its organization. The gateway implements it on top of an
//! [`OrganizationStore`](crate::OrganizationStore).

use async_trait::async_trait;

use crate::error::TenantResolverError;
use crate::host::HostSource;
use crate::models::Organization;

/// Public API trait for the tenant resolver gateway.
///
/// ```ignore
/// let org = resolver.resolve_by_host("subdomain.phbcloud.io").await?;
/// ```
#[async_trait]
pub trait TenantResolverGatewayClient: Send + Sync {
    /// Resolve the organization that owns `host`.
    ///
    /// `host` must already be port-free. A custom-domain match wins over a
    /// match of the leftmost label against organization names.
    ///
    /// # Errors
    ///
    /// - `TenantNotFound` if neither lookup matches
    /// - `Store` if the organization store fails
    async fn resolve_by_host(&self, host: &str) -> Result<Organization, TenantResolverError>;

    /// Resolve the organization for a request by reading its `host` header.
    ///
    /// The header value is used as-is.
    ///
    /// # Errors
    ///
    /// - `MissingHost` if the request carries no `host` header
    /// - otherwise the errors of [`Self::resolve_by_host`]
    async fn resolve_request(
        &self,
        req: &dyn HostSource,
    ) -> Result<Organization, TenantResolverError> {
        let host = req.host().ok_or(TenantResolverError::MissingHost)?;
        self.resolve_by_host(host).await
    }
}

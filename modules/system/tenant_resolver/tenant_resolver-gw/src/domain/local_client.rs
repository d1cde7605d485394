//! Local (in-process) client for the tenant resolver gateway.

use std::sync::Arc;

use async_trait::async_trait;
use tenant_resolver_sdk::{Organization, TenantResolverError, TenantResolverGatewayClient};

use super::{DomainError, Service};

/// Local client wrapping the gateway service.
///
/// Handed to the HTTP middleware and to any in-process consumer as
/// `Arc<dyn TenantResolverGatewayClient>`.
pub struct TenantResolverGwLocalClient {
    svc: Arc<Service>,
}

impl TenantResolverGwLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

#[async_trait]
impl TenantResolverGatewayClient for TenantResolverGwLocalClient {
    async fn resolve_by_host(&self, host: &str) -> Result<Organization, TenantResolverError> {
        self.svc
            .resolve_by_host(host)
            .await
            .map_err(|e: DomainError| {
                if matches!(e, DomainError::Store(_)) {
                    tracing::error!(operation = "resolve_by_host", error = ?e, "tenant_resolver gateway call failed");
                }
                e.into()
            })
    }
}

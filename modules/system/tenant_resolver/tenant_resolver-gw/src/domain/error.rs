//! Domain errors for the tenant resolver gateway.

use tenant_resolver_sdk::{BoxError, TenantResolverError};
use thiserror::Error;

/// Domain-level errors for tenant resolution.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Neither the custom-domain nor the subdomain lookup matched.
    #[error("tenant not found for host: {host}")]
    TenantNotFound { host: String },

    /// The request carried no host.
    #[error("request has no host header")]
    MissingHost,

    /// The organization store failed.
    #[error("organization store error: {0}")]
    Store(#[source] BoxError),
}

impl DomainError {
    pub(crate) fn not_found(host: &str) -> Self {
        Self::TenantNotFound {
            host: host.to_owned(),
        }
    }
}

impl From<TenantResolverError> for DomainError {
    fn from(e: TenantResolverError) -> Self {
        match e {
            TenantResolverError::TenantNotFound { host } => Self::TenantNotFound { host },
            TenantResolverError::MissingHost => Self::MissingHost,
            TenantResolverError::Store(source) => Self::Store(source),
        }
    }
}

/// Convert `DomainError` to the SDK error.
impl From<DomainError> for TenantResolverError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::TenantNotFound { host } => Self::TenantNotFound { host },
            DomainError::MissingHost => Self::MissingHost,
            DomainError::Store(source) => Self::Store(source),
        }
    }
}

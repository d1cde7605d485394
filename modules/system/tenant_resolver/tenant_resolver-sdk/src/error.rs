//! Error types for the tenant resolver module.

use thiserror::Error;

/// Boxed error used to carry store failures through unchanged.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when using the tenant resolver API.
#[derive(Debug, Error)]
pub enum TenantResolverError {
    /// No organization owns the host, neither as a custom domain nor by
    /// its subdomain label.
    #[error("tenant not found for host: {host}")]
    TenantNotFound {
        /// The host value that was resolved.
        host: String,
    },

    /// The request carried no `host` header.
    #[error("request has no host header")]
    MissingHost,

    /// The organization store failed. The store error is kept as the source.
    #[error("organization store error: {0}")]
    Store(#[source] BoxError),
}

impl TenantResolverError {
    /// Wraps any store-side error.
    #[must_use]
    pub fn store<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Store(err.into())
    }

    /// Returns `true` for the not-found outcome.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TenantNotFound { .. })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn not_found_message_carries_host() {
        let err = TenantResolverError::TenantNotFound {
            host: "unknowndomain.com".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "tenant not found for host: unknowndomain.com"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn store_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "db timed out");
        let err = TenantResolverError::store(io);

        assert!(!err.is_not_found());
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("db timed out"));
    }
}

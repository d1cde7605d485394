//! Store API trait for organization lookups.
//!
//! Plugins implement this trait to expose organization records to the
//! gateway. The gateway calls the two lookups in a fixed order and never
//! merges them into one query.

use async_trait::async_trait;

use crate::error::TenantResolverError;
use crate::models::Organization;

/// Organization lookups backing the resolver.
///
/// Implementations own the uniqueness of names and custom domains: a domain
/// registered to two organizations is a store defect, not something the
/// resolver arbitrates.
#[async_trait]
pub trait OrganizationStore: Send + Sync {
    /// Find the organization whose custom domains contain `domain`
    /// (exact, case-sensitive).
    ///
    /// # Errors
    ///
    /// - `Store` on backend failure
    async fn find_by_custom_domain(
        &self,
        domain: &str,
    ) -> Result<Option<Organization>, TenantResolverError>;

    /// Find the organization named `name` (exact, case-sensitive).
    ///
    /// # Errors
    ///
    /// - `Store` on backend failure
    async fn find_by_name(&self, name: &str) -> Result<Option<Organization>, TenantResolverError>;
}

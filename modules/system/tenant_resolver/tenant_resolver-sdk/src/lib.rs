//! Tenant Resolver SDK
//!
//! This crate provides the public API for the `tenant_resolver` module:
//!
//! - [`TenantResolverGatewayClient`] - Public API trait for consumers
//! - [`OrganizationStore`] - Store API trait implemented by plugins
//! - [`HostSource`] - Request boundary used to read the `host` header
//! - [`Organization`], [`NewOrganization`] - Domain models
//! - [`TenantResolverError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use tenant_resolver_sdk::TenantResolverGatewayClient;
//!
//! // Resolve by an already port-stripped hostname
//! let org = resolver.resolve_by_host("acme.nms.example.com").await?;
//!
//! // Or let the client read `host` from the request headers
//! let org = resolver.resolve_request(req.headers()).await?;
//! ```

pub mod api;
pub mod error;
pub mod host;
pub mod models;
pub mod plugin_api;

// Re-export main types at crate root
pub use api::TenantResolverGatewayClient;
pub use error::{BoxError, TenantResolverError};
pub use host::{HOST_HEADER, HostSource};
pub use models::{NewOrganization, Organization, OrganizationId};
pub use plugin_api::OrganizationStore;

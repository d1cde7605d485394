//! Tenant Resolver Gateway Module
//!
//! Maps an inbound request's host to the organization that owns it.
//! Resolution is an ordered two-step lookup against an injected
//! [`OrganizationStore`](tenant_resolver_sdk::OrganizationStore):
//!
//! 1. exact custom-domain match on the full host
//! 2. organization name match on the host's leftmost label
//!
//! The gateway exposes [`TenantResolverGatewayClient`](tenant_resolver_sdk::TenantResolverGatewayClient)
//! through [`domain::TenantResolverGwLocalClient`], plus an axum middleware
//! that resolves the organization once per request and stores it in the
//! request extensions.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod config;
pub mod domain;

pub use api::rest::middleware::{TenantResolutionState, resolve_organization};
pub use api::rest::routes::{organization_routes, with_tenant_resolution};
pub use config::TenantResolverGwConfig;
pub use domain::{DomainError, Service, TenantResolverGwLocalClient};

//! Static Tenant Resolver Plugin
//!
//! This plugin serves organization records from configuration.
//! Useful for testing, development, and small deployments.
//!
//! ## Configuration
//!
//! ```yaml
//! static_tr_plugin:
//!   organizations:
//!     - id: "550e8400-e29b-41d4-a716-446655440001"
//!       name: "acme"
//!       custom_domains: ["nms.acme.com"]
//!       network_ids: ["acme_lte"]
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::{OrganizationConfig, StaticTrPluginConfig};
pub use domain::{Service, StaticStoreError};

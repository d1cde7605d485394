//! NMS server library: configuration, logging and HTTP wiring.
//!
//! The binary in `main.rs` is a thin CLI over these pieces; tests build the
//! router directly.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod app;
pub mod config;
pub mod logging;
pub mod signals;

pub use app::{HEALTH_PATH, build_router, build_store, serve};
pub use config::{AppConfig, LogFormat, LoggingConfig, ServerConfig, TenantStoreKind};

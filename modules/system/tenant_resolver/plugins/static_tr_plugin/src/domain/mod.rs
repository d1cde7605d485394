//! Domain layer for the static tenant resolver plugin.

mod client;
pub mod error;
pub mod service;

pub use error::StaticStoreError;
pub use service::Service;

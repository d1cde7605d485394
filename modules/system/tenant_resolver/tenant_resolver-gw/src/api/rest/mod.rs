//! HTTP surface of the tenant resolver.

pub mod dto;
pub mod error;
pub mod middleware;
pub mod problem;
pub mod routes;

//! Storage infrastructure for organizations.

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod organization_repo;

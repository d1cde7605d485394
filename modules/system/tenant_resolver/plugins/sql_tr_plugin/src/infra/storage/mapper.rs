//! Entity to domain model mappers.

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{Set, Unchanged};
use tenant_resolver_sdk::{NewOrganization, Organization};
use uuid::Uuid;

use super::entity::{custom_domain, network, organization};

/// Assemble an organization from its row and child rows.
///
/// `domains` must already be in `position` order.
#[must_use]
pub fn organization_with_children(
    model: organization::Model,
    domains: Vec<custom_domain::Model>,
    networks: Vec<network::Model>,
) -> Organization {
    Organization {
        id: model.id,
        name: model.name,
        custom_domains: domains.into_iter().map(|d| d.domain).collect(),
        network_ids: networks.into_iter().map(|n| n.network_id).collect(),
        csv_charset: model.csv_charset,
        sso_cert: model.sso_cert,
        sso_entrypoint: model.sso_entrypoint,
        sso_issuer: model.sso_issuer,
    }
}

/// Convert a new organization to an active model.
#[must_use]
pub fn new_organization_to_active_model(
    new_org: &NewOrganization,
    id: Uuid,
    now: DateTime<Utc>,
) -> organization::ActiveModel {
    organization::ActiveModel {
        id: Set(id),
        name: Set(new_org.name.clone()),
        csv_charset: Set(new_org.csv_charset.clone()),
        sso_cert: Set(new_org.sso_cert.clone()),
        sso_entrypoint: Set(new_org.sso_entrypoint.clone()),
        sso_issuer: Set(new_org.sso_issuer.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

/// Active model that overwrites `existing` with `changes`.
///
/// The id and creation time are kept.
#[must_use]
pub fn updated_organization_active_model(
    existing: organization::Model,
    changes: &NewOrganization,
    now: DateTime<Utc>,
) -> organization::ActiveModel {
    organization::ActiveModel {
        id: Unchanged(existing.id),
        name: Set(changes.name.clone()),
        csv_charset: Set(changes.csv_charset.clone()),
        sso_cert: Set(changes.sso_cert.clone()),
        sso_entrypoint: Set(changes.sso_entrypoint.clone()),
        sso_issuer: Set(changes.sso_issuer.clone()),
        created_at: Unchanged(existing.created_at),
        updated_at: Set(now),
    }
}

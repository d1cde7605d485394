//! `SeaORM` organization store.

use std::collections::HashSet;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use sea_orm_migration::MigratorTrait;
use tenant_resolver_sdk::{
    NewOrganization, Organization, OrganizationId, OrganizationStore, TenantResolverError,
};
use tracing::{debug, info};
use uuid::Uuid;

use super::entity::{custom_domain, network, organization};
use super::mapper::{
    new_organization_to_active_model, organization_with_children,
    updated_organization_active_model,
};
use super::migrations::Migrator;
use crate::config::SqlTrPluginConfig;

/// Custom domains in first-seen order with repeats dropped.
fn unique_domains(domains: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    domains
        .iter()
        .filter(|d| seen.insert(d.as_str()))
        .cloned()
        .collect()
}

async fn insert_children<C: ConnectionTrait>(
    conn: &C,
    id: OrganizationId,
    domains: &[String],
    networks: &[String],
) -> Result<(), DbErr> {
    for (position, domain) in domains.iter().enumerate() {
        let position = i32::try_from(position).map_err(|e| DbErr::Custom(e.to_string()))?;
        custom_domain::ActiveModel {
            domain: Set(domain.clone()),
            organization_id: Set(id),
            position: Set(position),
        }
        .insert(conn)
        .await?;
    }

    for network_id in networks {
        network::ActiveModel {
            organization_id: Set(id),
            network_id: Set(network_id.clone()),
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}

async fn delete_children<C: ConnectionTrait>(conn: &C, id: OrganizationId) -> Result<(), DbErr> {
    custom_domain::Entity::delete_many()
        .filter(custom_domain::Column::OrganizationId.eq(id))
        .exec(conn)
        .await?;
    network::Entity::delete_many()
        .filter(network::Column::OrganizationId.eq(id))
        .exec(conn)
        .await?;
    Ok(())
}

/// Organization store over the `organization` tables.
#[derive(Clone)]
pub struct SeaOrmOrganizationStore {
    conn: DatabaseConnection,
}

impl SeaOrmOrganizationStore {
    #[must_use]
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Open the pool described by `cfg` and apply migrations when enabled.
    ///
    /// # Errors
    /// Fails when the database is unreachable or a migration fails.
    pub async fn connect(cfg: &SqlTrPluginConfig) -> anyhow::Result<Self> {
        let max_connections = cfg.effective_max_connections();
        let mut opts = ConnectOptions::new(cfg.dsn.clone());
        opts.max_connections(max_connections)
            .min_connections(1)
            .sqlx_logging(false);

        let conn = Database::connect(opts).await?;
        info!(max_connections, "organization database connected");

        if cfg.run_migrations {
            Migrator::up(&conn, None).await?;
            info!("organization migrations applied");
        }

        Ok(Self::new(conn))
    }

    #[must_use]
    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    async fn load(&self, model: organization::Model) -> Result<Organization, DbErr> {
        let domains = custom_domain::Entity::find()
            .filter(custom_domain::Column::OrganizationId.eq(model.id))
            .order_by_asc(custom_domain::Column::Position)
            .all(&self.conn)
            .await?;
        let networks = network::Entity::find()
            .filter(network::Column::OrganizationId.eq(model.id))
            .all(&self.conn)
            .await?;
        Ok(organization_with_children(model, domains, networks))
    }

    /// Insert an organization with its custom domains and networks in one
    /// transaction.
    ///
    /// A domain repeated within `new_org` is stored once.
    ///
    /// # Errors
    /// Fails (and writes nothing) when the name, the id or any custom
    /// domain is already taken.
    pub async fn insert(&self, new_org: NewOrganization) -> anyhow::Result<Organization> {
        let id = new_org.id.unwrap_or_else(Uuid::now_v7);
        let now = chrono::Utc::now();

        let domains = unique_domains(&new_org.custom_domains);
        let networks: Vec<String> = new_org.network_ids.iter().cloned().collect();
        let active_model = new_organization_to_active_model(&new_org, id, now);
        let rows = domains.clone();

        self.conn
            .transaction::<_, (), DbErr>(move |txn| {
                Box::pin(async move {
                    active_model.insert(txn).await?;
                    insert_children(txn, id, &rows, &networks).await
                })
            })
            .await?;

        info!(organization_id = %id, name = %new_org.name, "organization inserted");

        let mut org = new_org.into_organization(id);
        org.custom_domains = domains;
        Ok(org)
    }

    /// Replace the organization named `name` with `changes` in one
    /// transaction.
    ///
    /// The id and creation time are kept. Custom domains and networks are
    /// replaced wholesale, so a domain left out of `changes` is released.
    /// `changes.id` is ignored. Returns `None` when no organization has
    /// `name`.
    ///
    /// # Errors
    /// Fails (and changes nothing) when the new name or any custom domain
    /// belongs to another organization.
    pub async fn update(
        &self,
        name: &str,
        changes: NewOrganization,
    ) -> anyhow::Result<Option<Organization>> {
        let lookup = name.to_owned();
        let now = chrono::Utc::now();
        let domains = unique_domains(&changes.custom_domains);
        let networks: Vec<String> = changes.network_ids.iter().cloned().collect();

        let updated = self
            .conn
            .transaction::<_, Option<Organization>, DbErr>(move |txn| {
                Box::pin(async move {
                    let Some(existing) = organization::Entity::find()
                        .filter(organization::Column::Name.eq(lookup))
                        .one(txn)
                        .await?
                    else {
                        return Ok(None);
                    };
                    let id = existing.id;

                    delete_children(txn, id).await?;
                    updated_organization_active_model(existing, &changes, now)
                        .update(txn)
                        .await?;
                    insert_children(txn, id, &domains, &networks).await?;

                    let mut org = changes.into_organization(id);
                    org.custom_domains = domains;
                    Ok(Some(org))
                })
            })
            .await?;

        match &updated {
            Some(org) => {
                info!(organization_id = %org.id, from = name, to = %org.name, "organization updated");
            }
            None => debug!(name, "no organization to update"),
        }
        Ok(updated)
    }

    /// Delete an organization together with its domains and networks.
    ///
    /// Returns `false` when no organization has `id`.
    ///
    /// # Errors
    /// Fails when the database rejects the delete.
    pub async fn delete(&self, id: OrganizationId) -> anyhow::Result<bool> {
        let deleted = self
            .conn
            .transaction::<_, u64, DbErr>(move |txn| {
                Box::pin(async move {
                    delete_children(txn, id).await?;
                    let res = organization::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(res.rows_affected)
                })
            })
            .await?;

        if deleted > 0 {
            info!(organization_id = %id, "organization deleted");
        }
        Ok(deleted > 0)
    }

    /// All organizations, ordered by name.
    ///
    /// # Errors
    /// Fails when the database query fails.
    pub async fn list(&self) -> anyhow::Result<Vec<Organization>> {
        let models = organization::Entity::find()
            .order_by_asc(organization::Column::Name)
            .all(&self.conn)
            .await?;

        let mut orgs = Vec::with_capacity(models.len());
        for model in models {
            orgs.push(self.load(model).await?);
        }
        Ok(orgs)
    }
}

#[async_trait]
impl OrganizationStore for SeaOrmOrganizationStore {
    async fn find_by_custom_domain(
        &self,
        domain: &str,
    ) -> Result<Option<Organization>, TenantResolverError> {
        let Some(row) = custom_domain::Entity::find_by_id(domain.to_owned())
            .one(&self.conn)
            .await
            .map_err(TenantResolverError::store)?
        else {
            return Ok(None);
        };

        let Some(model) = organization::Entity::find_by_id(row.organization_id)
            .one(&self.conn)
            .await
            .map_err(TenantResolverError::store)?
        else {
            debug!(domain, organization_id = %row.organization_id, "custom domain has no organization row");
            return Ok(None);
        };

        self.load(model)
            .await
            .map(Some)
            .map_err(TenantResolverError::store)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Organization>, TenantResolverError> {
        let Some(model) = organization::Entity::find()
            .filter(organization::Column::Name.eq(name))
            .one(&self.conn)
            .await
            .map_err(TenantResolverError::store)?
        else {
            return Ok(None);
        };

        self.load(model)
            .await
            .map(Some)
            .map_err(TenantResolverError::store)
    }
}

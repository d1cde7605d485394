//! Domain service for the static tenant resolver plugin.

use std::collections::{HashMap, HashSet};
use std::collections::hash_map::Entry;

use tenant_resolver_sdk::{Organization, OrganizationId};

use super::error::StaticStoreError;
use crate::config::StaticTrPluginConfig;

/// Static organization store.
///
/// Holds organization data in memory, loaded once from configuration.
/// Immutable after construction, so lookups need no locking.
#[derive(Debug)]
pub struct Service {
    /// Organization records by name.
    pub(super) by_name: HashMap<String, Organization>,

    /// Custom domain -> owning organization name.
    pub(super) by_domain: HashMap<String, String>,
}

impl Service {
    /// Builds the store from configuration.
    ///
    /// # Errors
    ///
    /// Fails when a name is empty or repeated, an ID is repeated, or a
    /// custom domain is claimed by more than one organization.
    pub fn from_config(cfg: &StaticTrPluginConfig) -> Result<Self, StaticStoreError> {
        let mut by_name: HashMap<String, Organization> = HashMap::new();
        let mut by_domain: HashMap<String, String> = HashMap::new();
        let mut ids: HashSet<OrganizationId> = HashSet::new();

        for org_cfg in &cfg.organizations {
            let org = Organization::from(org_cfg);

            if org.name.is_empty() {
                return Err(StaticStoreError::EmptyName { id: org.id });
            }
            if !ids.insert(org.id) {
                return Err(StaticStoreError::DuplicateId { id: org.id });
            }

            for domain in &org.custom_domains {
                match by_domain.entry(domain.clone()) {
                    Entry::Occupied(existing) => {
                        // Repeating a domain inside one organization is harmless.
                        if existing.get() != &org.name {
                            return Err(StaticStoreError::DuplicateCustomDomain {
                                domain: domain.clone(),
                                first: existing.get().clone(),
                                second: org.name.clone(),
                            });
                        }
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(org.name.clone());
                    }
                }
            }

            match by_name.entry(org.name.clone()) {
                Entry::Occupied(_) => {
                    return Err(StaticStoreError::DuplicateName { name: org.name });
                }
                Entry::Vacant(slot) => {
                    slot.insert(org);
                }
            }
        }

        tracing::info!(
            organizations = by_name.len(),
            custom_domains = by_domain.len(),
            "Loaded static organizations"
        );

        Ok(Self { by_name, by_domain })
    }

    /// Number of configured organizations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

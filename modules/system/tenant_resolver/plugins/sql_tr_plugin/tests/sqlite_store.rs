#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Organization store against an in-memory SQLite database.

use std::collections::BTreeSet;
use std::sync::Arc;

use sql_tr_plugin::{SeaOrmOrganizationStore, SqlTrPluginConfig};
use tenant_resolver_gw::{DomainError, Service};
use tenant_resolver_sdk::{NewOrganization, OrganizationStore};
use uuid::Uuid;

async fn store() -> SeaOrmOrganizationStore {
    SeaOrmOrganizationStore::connect(&SqlTrPluginConfig::default())
        .await
        .expect("in-memory database")
}

fn new_org(name: &str, domains: &[&str]) -> NewOrganization {
    NewOrganization {
        name: name.to_owned(),
        custom_domains: domains.iter().map(|d| (*d).to_owned()).collect(),
        ..Default::default()
    }
}

async fn scenario_store() -> SeaOrmOrganizationStore {
    let store = store().await;
    store
        .insert(NewOrganization {
            network_ids: BTreeSet::from(["net1".to_owned(), "net2".to_owned()]),
            csv_charset: "utf-8".to_owned(),
            sso_entrypoint: "https://idp.localtest.me/sso".to_owned(),
            ..new_org("custom_domain_org", &["subdomain.localtest.me"])
        })
        .await
        .unwrap();
    store.insert(new_org("subdomain", &[])).await.unwrap();
    store
}

#[tokio::test]
async fn finds_by_custom_domain_with_children() {
    let store = scenario_store().await;

    let org = store
        .find_by_custom_domain("subdomain.localtest.me")
        .await
        .unwrap()
        .expect("custom domain row");

    assert_eq!(org.name, "custom_domain_org");
    assert_eq!(org.custom_domains, vec!["subdomain.localtest.me"]);
    assert_eq!(
        org.network_ids,
        BTreeSet::from(["net1".to_owned(), "net2".to_owned()])
    );
    assert_eq!(org.csv_charset, "utf-8");
    assert!(org.sso_configured());
}

#[tokio::test]
async fn finds_by_name() {
    let store = scenario_store().await;

    let org = store.find_by_name("subdomain").await.unwrap().unwrap();

    assert_eq!(org.name, "subdomain");
    assert!(org.custom_domains.is_empty());
    assert!(store.find_by_name("unknowndomain").await.unwrap().is_none());
}

#[tokio::test]
async fn domain_lookup_is_exact() {
    let store = scenario_store().await;

    for host in ["SUBDOMAIN.LOCALTEST.ME", "localtest.me", "subdomain.localtest.me."] {
        assert!(
            store.find_by_custom_domain(host).await.unwrap().is_none(),
            "{host} should not match"
        );
    }
}

#[tokio::test]
async fn resolves_scenario_through_gateway_service() {
    let svc = Service::new(Arc::new(scenario_store().await));

    let by_domain = svc.resolve_by_host("subdomain.localtest.me").await.unwrap();
    let by_label = svc.resolve_by_host("subdomain.phbcloud.io").await.unwrap();
    let missing = svc.resolve_by_host("unknowndomain.com").await.unwrap_err();

    assert_eq!(by_domain.name, "custom_domain_org");
    assert_eq!(by_label.name, "subdomain");
    assert!(matches!(missing, DomainError::TenantNotFound { .. }));
}

#[tokio::test]
async fn domain_order_is_kept_and_repeats_collapse() {
    let store = store().await;

    let inserted = store
        .insert(new_org(
            "acme",
            &["nms.acme.com", "inventory.acme.com", "nms.acme.com"],
        ))
        .await
        .unwrap();
    let loaded = store.find_by_name("acme").await.unwrap().unwrap();

    assert_eq!(inserted.custom_domains, vec!["nms.acme.com", "inventory.acme.com"]);
    assert_eq!(loaded, inserted);
}

#[tokio::test]
async fn domain_claimed_by_second_organization_is_rejected() {
    let store = store().await;
    store
        .insert(new_org("acme", &["nms.shared.io"]))
        .await
        .unwrap();

    let result = store
        .insert(new_org("globex", &["nms.globex.io", "nms.shared.io"]))
        .await;

    assert!(result.is_err());
    // Nothing of the failed insert is left behind
    assert!(store.find_by_name("globex").await.unwrap().is_none());
    assert!(
        store
            .find_by_custom_domain("nms.globex.io")
            .await
            .unwrap()
            .is_none()
    );
    let owner = store
        .find_by_custom_domain("nms.shared.io")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(owner.name, "acme");
}

#[tokio::test]
async fn duplicate_name_is_rejected() {
    let store = store().await;
    store.insert(new_org("acme", &[])).await.unwrap();

    assert!(store.insert(new_org("acme", &[])).await.is_err());
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn explicit_id_is_kept() {
    let store = store().await;
    let id = Uuid::new_v4();

    let org = store
        .insert(NewOrganization {
            id: Some(id),
            ..new_org("acme", &[])
        })
        .await
        .unwrap();

    assert_eq!(org.id, id);
    assert_eq!(store.find_by_name("acme").await.unwrap().unwrap().id, id);
}

#[tokio::test]
async fn delete_removes_domains_and_networks() {
    let store = scenario_store().await;
    let org = store.find_by_name("custom_domain_org").await.unwrap().unwrap();

    assert!(store.delete(org.id).await.unwrap());
    assert!(!store.delete(org.id).await.unwrap());

    assert!(
        store
            .find_by_custom_domain("subdomain.localtest.me")
            .await
            .unwrap()
            .is_none()
    );
    // The domain is free again
    store
        .insert(new_org("newcomer", &["subdomain.localtest.me"]))
        .await
        .unwrap();
}

#[tokio::test]
async fn list_is_ordered_by_name() {
    let store = store().await;
    for name in ["globex", "acme", "initech"] {
        store.insert(new_org(name, &[])).await.unwrap();
    }

    let names: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.name)
        .collect();

    assert_eq!(names, vec!["acme", "globex", "initech"]);
}

#[tokio::test]
async fn unreachable_database_is_an_error() {
    let cfg = SqlTrPluginConfig {
        dsn: "sqlite:///nonexistent-dir/for/nms/test.db?mode=ro".to_owned(),
        ..Default::default()
    };

    assert!(SeaOrmOrganizationStore::connect(&cfg).await.is_err());
}

#[tokio::test]
async fn name_lookup_is_case_sensitive() {
    let store = scenario_store().await;

    assert!(store.find_by_name("SUBDOMAIN").await.unwrap().is_none());
    store.insert(new_org("Subdomain", &[])).await.unwrap();
    assert_eq!(
        store.find_by_name("Subdomain").await.unwrap().unwrap().name,
        "Subdomain"
    );
}

#[tokio::test]
async fn update_renames_and_keeps_id() {
    let store = scenario_store().await;
    let before = store.find_by_name("subdomain").await.unwrap().unwrap();

    let updated = store
        .update(
            "subdomain",
            NewOrganization {
                csv_charset: "windows-1252".to_owned(),
                ..new_org("renamed", &["renamed.localtest.me"])
            },
        )
        .await
        .unwrap()
        .expect("organization exists");

    assert_eq!(updated.id, before.id);
    assert_eq!(updated.name, "renamed");
    assert!(store.find_by_name("subdomain").await.unwrap().is_none());
    let loaded = store.find_by_name("renamed").await.unwrap().unwrap();
    assert_eq!(loaded, updated);
    assert_eq!(loaded.csv_charset, "windows-1252");
}

#[tokio::test]
async fn update_moves_domain_between_organizations() {
    let store = store().await;
    store
        .insert(new_org("acme", &["nms.acme.com", "old.acme.com"]))
        .await
        .unwrap();
    store.insert(new_org("globex", &[])).await.unwrap();

    store
        .update("acme", new_org("acme", &["nms.acme.com"]))
        .await
        .unwrap()
        .unwrap();
    store
        .update("globex", new_org("globex", &["old.acme.com"]))
        .await
        .unwrap()
        .unwrap();

    let owner = store
        .find_by_custom_domain("old.acme.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(owner.name, "globex");
    let acme = store.find_by_name("acme").await.unwrap().unwrap();
    assert_eq!(acme.custom_domains, vec!["nms.acme.com"]);
}

#[tokio::test]
async fn update_with_foreign_domain_is_rolled_back() {
    let store = store().await;
    store
        .insert(NewOrganization {
            network_ids: BTreeSet::from(["net1".to_owned()]),
            ..new_org("acme", &["nms.acme.com"])
        })
        .await
        .unwrap();
    store
        .insert(new_org("globex", &["nms.globex.io"]))
        .await
        .unwrap();
    let before = store.find_by_name("acme").await.unwrap().unwrap();

    let result = store
        .update(
            "acme",
            new_org("acme-corp", &["nms.acme.com", "nms.globex.io"]),
        )
        .await;

    assert!(result.is_err());
    assert_eq!(store.find_by_name("acme").await.unwrap().unwrap(), before);
    assert!(store.find_by_name("acme-corp").await.unwrap().is_none());
    let owner = store
        .find_by_custom_domain("nms.globex.io")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(owner.name, "globex");
}

#[tokio::test]
async fn update_to_taken_name_is_rejected() {
    let store = scenario_store().await;

    let result = store
        .update("subdomain", new_org("custom_domain_org", &[]))
        .await;

    assert!(result.is_err());
    assert!(store.find_by_name("subdomain").await.unwrap().is_some());
}

#[tokio::test]
async fn update_of_unknown_name_is_none() {
    let store = scenario_store().await;

    let result = store
        .update("unknowndomain", new_org("unknowndomain", &[]))
        .await
        .unwrap();

    assert!(result.is_none());
    assert_eq!(store.list().await.unwrap().len(), 2);
}

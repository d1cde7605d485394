#![allow(clippy::unwrap_used, clippy::expect_used)]

//! HTTP-level checks of the assembled server router.

use std::collections::BTreeSet;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use nms_server::{AppConfig, HEALTH_PATH, TenantStoreKind, build_router, build_store};
use serde_json::Value;
use static_tr_plugin::OrganizationConfig;
use tenant_resolver_gw::api::rest::routes::CURRENT_ORGANIZATION_PATH;
use tower::ServiceExt;
use uuid::Uuid;

fn organization(name: &str, domains: &[&str]) -> OrganizationConfig {
    OrganizationConfig {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        custom_domains: domains.iter().map(|d| (*d).to_owned()).collect(),
        network_ids: BTreeSet::new(),
        csv_charset: "utf-8".to_owned(),
        sso_cert: String::new(),
        sso_entrypoint: String::new(),
        sso_issuer: String::new(),
    }
}

async fn scenario_router() -> Router {
    let mut cfg = AppConfig::default();
    cfg.static_tr_plugin.organizations = vec![
        organization("custom_domain_org", &["subdomain.localtest.me"]),
        organization("subdomain", &[]),
    ];
    let store = build_store(&cfg).await.unwrap();
    build_router(store, &cfg.tenant_resolver)
}

async fn get(router: Router, path: &str, host: Option<&str>) -> (StatusCode, Value) {
    let mut req = Request::builder().uri(path);
    if let Some(host) = host {
        req = req.header("host", host);
    }
    let resp = router
        .oneshot(req.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn custom_domain_host_resolves_custom_domain_org() {
    let (status, body) = get(
        scenario_router().await,
        CURRENT_ORGANIZATION_PATH,
        Some("subdomain.localtest.me:8087"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "custom_domain_org");
    assert_eq!(body["csvCharset"], "utf-8");
}

#[tokio::test]
async fn platform_subdomain_resolves_by_label() {
    let (status, body) = get(
        scenario_router().await,
        CURRENT_ORGANIZATION_PATH,
        Some("subdomain.phbcloud.io"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "subdomain");
}

#[tokio::test]
async fn unknown_host_is_rejected() {
    let (status, body) = get(
        scenario_router().await,
        CURRENT_ORGANIZATION_PATH,
        Some("unknowndomain.com"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "TENANT_NOT_FOUND");
}

#[tokio::test]
async fn health_is_not_gated_on_tenant() {
    let (status, body) = get(scenario_router().await, HEALTH_PATH, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn unknown_path_is_plain_404_without_lookup() {
    let (status, body) = get(scenario_router().await, "/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn empty_sql_store_finds_nothing() {
    let cfg = AppConfig {
        tenant_store: TenantStoreKind::Sql,
        ..Default::default()
    };
    let store = build_store(&cfg).await.unwrap();
    let router = build_router(store, &cfg.tenant_resolver);

    let (status, body) = get(router, CURRENT_ORGANIZATION_PATH, Some("subdomain.phbcloud.io")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "TENANT_NOT_FOUND");
}

#[tokio::test]
async fn inconsistent_static_store_fails_to_build() {
    let mut cfg = AppConfig::default();
    cfg.static_tr_plugin.organizations = vec![
        organization("acme", &["nms.shared.io"]),
        organization("globex", &["nms.shared.io"]),
    ];

    let err = build_store(&cfg).await.err().expect("duplicate domain");

    assert!(format!("{err:#}").contains("nms.shared.io"));
}

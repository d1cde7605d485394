//! Store selection and HTTP router assembly.

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use sql_tr_plugin::SeaOrmOrganizationStore;
use tenant_resolver_gw::{
    Service, TenantResolutionState, TenantResolverGwConfig, TenantResolverGwLocalClient,
    organization_routes, with_tenant_resolution,
};
use tenant_resolver_sdk::OrganizationStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, TenantStoreKind};

/// Liveness endpoint; answered without organization resolution.
pub const HEALTH_PATH: &str = "/health";

/// Build the organization store selected by `tenant_store`.
///
/// # Errors
/// Fails when the static organization list is inconsistent or the database
/// cannot be reached.
pub async fn build_store(cfg: &AppConfig) -> anyhow::Result<Arc<dyn OrganizationStore>> {
    match cfg.tenant_store {
        TenantStoreKind::Static => {
            let svc = static_tr_plugin::Service::from_config(&cfg.static_tr_plugin)
                .context("invalid static_tr_plugin configuration")?;
            Ok(Arc::new(svc))
        }
        TenantStoreKind::Sql => {
            let store = SeaOrmOrganizationStore::connect(&cfg.sql_tr_plugin)
                .await
                .context("failed to open organization database")?;
            Ok(Arc::new(store))
        }
    }
}

/// Assemble the application router.
///
/// Tenant routes sit behind organization resolution; the health check
/// does not.
#[must_use]
pub fn build_router(store: Arc<dyn OrganizationStore>, cfg: &TenantResolverGwConfig) -> Router {
    let svc = Arc::new(Service::new(store));
    let client = Arc::new(TenantResolverGwLocalClient::new(svc));
    let tenant_routes = with_tenant_resolution(
        organization_routes(),
        TenantResolutionState::new(client, cfg),
    );

    Router::new()
        .route(HEALTH_PATH, get(health))
        .merge(tenant_routes)
        .layer(TraceLayer::new_for_http())
}

/// Serve `router` on `listener` until `shutdown` resolves.
///
/// # Errors
/// Fails if the server stops with an I/O error.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

//! Route wiring for the tenant resolver.

use axum::routing::get;
use axum::{Extension, Json, Router};
use tenant_resolver_sdk::Organization;

use super::dto::OrganizationDto;
use super::middleware::{TenantResolutionState, resolve_organization};

/// Path of the current-organization endpoint.
pub const CURRENT_ORGANIZATION_PATH: &str = "/tenant-resolver/v1/organization";

/// Routes that read the resolved organization.
///
/// Must sit behind [`with_tenant_resolution`].
#[must_use]
pub fn organization_routes() -> Router {
    Router::new().route(CURRENT_ORGANIZATION_PATH, get(get_current_organization))
}

/// Gate every route of `router` on organization resolution.
///
/// Unmatched paths fall through to the 404 fallback without a lookup.
#[must_use]
pub fn with_tenant_resolution(router: Router, state: TenantResolutionState) -> Router {
    router.route_layer(axum::middleware::from_fn_with_state(
        state,
        resolve_organization,
    ))
}

async fn get_current_organization(Extension(org): Extension<Organization>) -> Json<OrganizationDto> {
    Json(org.into())
}

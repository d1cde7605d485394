//! Organization resolution middleware.
//!
//! Resolves the organization once per request and stores it in the request
//! extensions, where handlers pick it up with `Extension<Organization>`.
//!
//! # Behavior
//!
//! - Host taken from `host` (or the forwarded-host header when trusted)
//! - Port suffix stripped before resolution
//! - No host: 400 Bad Request
//! - Unparsable host (userinfo, empty port, non-UTF-8 bytes): 400 Bad Request
//! - No matching organization: 404 Not Found
//! - Store failure: 503 Service Unavailable

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::uri::Authority;
use tenant_resolver_sdk::{HostSource, TenantResolverGatewayClient};

use super::problem::Problem;
use crate::config::TenantResolverGwConfig;
use crate::domain::DomainError;

/// Type alias for the tenant resolver gateway client.
pub type TenantResolverClient = Arc<dyn TenantResolverGatewayClient>;

/// State for the organization resolution middleware.
#[derive(Clone)]
pub struct TenantResolutionState {
    pub client: TenantResolverClient,
    /// Forwarded-host header to consult first; `None` when not trusted.
    pub forwarded_host_header: Option<Arc<str>>,
}

impl TenantResolutionState {
    #[must_use]
    pub fn new(client: TenantResolverClient, cfg: &TenantResolverGwConfig) -> Self {
        let forwarded_host_header = cfg
            .trust_forwarded_host
            .then(|| Arc::from(cfg.forwarded_host_header.as_str()));
        Self {
            client,
            forwarded_host_header,
        }
    }

    /// Picks the raw host value for a request.
    ///
    /// A forwarded header may list several hops; the first one is the
    /// client-facing host.
    fn raw_host<'a>(&self, headers: &'a dyn HostSource) -> Option<&'a str> {
        let forwarded = self
            .forwarded_host_header
            .as_deref()
            .and_then(|name| headers.get(name))
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());
        forwarded.or_else(|| headers.host())
    }

    /// True when a host header was sent but could not be read.
    fn has_unreadable_host(&self, headers: &http::HeaderMap) -> bool {
        headers.contains_key(http::header::HOST)
            || self
                .forwarded_host_header
                .as_deref()
                .is_some_and(|name| headers.contains_key(name))
    }
}

/// Strips an optional `:port` suffix from a host header value.
///
/// Returns `None` unless the value is exactly `host` or `host:port`.
/// Userinfo and an empty port are rejected.
#[must_use]
pub fn strip_port(raw: &str) -> Option<String> {
    let authority = raw.parse::<Authority>().ok()?;
    let host = authority.host();
    if host.is_empty() {
        return None;
    }
    let exact = match authority.port() {
        Some(port) => authority.as_str() == format!("{host}:{}", port.as_str()),
        None => authority.as_str() == host,
    };
    exact.then(|| host.to_owned())
}

fn invalid_host_response(detail: String, path: &str) -> Response {
    Problem::new(StatusCode::BAD_REQUEST, "Invalid host", detail)
        .with_code("TENANT_HOST_INVALID")
        .with_instance(path)
        .into_response()
}

/// Axum middleware resolving the request's organization.
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn resolve_organization(
    State(state): State<TenantResolutionState>,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();

    let Some(raw) = state.raw_host(req.headers()).map(str::to_owned) else {
        if state.has_unreadable_host(req.headers()) {
            tracing::warn!(path = %path, "request host header is not valid UTF-8");
            return invalid_host_response("Host header is not valid UTF-8".to_owned(), &path);
        }
        tracing::warn!(path = %path, "request has no host header");
        return Problem::from(DomainError::MissingHost)
            .with_instance(path)
            .into_response();
    };

    let Some(host) = strip_port(&raw) else {
        tracing::warn!(path = %path, host = %raw, "request host is not a valid authority");
        return invalid_host_response(
            format!("Host header '{raw}' is not a valid host"),
            &path,
        );
    };

    match state.client.resolve_by_host(&host).await {
        Ok(org) => {
            tracing::debug!(host = %host, organization = %org.name, "organization resolved");
            req.extensions_mut().insert(org);
            next.run(req).await
        }
        Err(e) => {
            let e = DomainError::from(e);
            if matches!(e, DomainError::TenantNotFound { .. }) {
                tracing::warn!(host = %host, path = %path, "no organization for host");
            }
            Problem::from(e).with_instance(path).into_response()
        }
    }
}

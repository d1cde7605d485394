//! REST error mapping for the tenant resolver.

use http::StatusCode;

use super::problem::Problem;
use crate::domain::DomainError;

/// Convert `DomainError` to `Problem` for REST responses.
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        let trace_id = tracing::Span::current()
            .id()
            .map(|id| id.into_u64().to_string());

        let (status, code, title, detail) = match &e {
            DomainError::TenantNotFound { host } => (
                StatusCode::NOT_FOUND,
                "TENANT_NOT_FOUND",
                "Tenant not found",
                format!("No organization is registered for host '{host}'"),
            ),
            DomainError::MissingHost => (
                StatusCode::BAD_REQUEST,
                "TENANT_HOST_MISSING",
                "Missing host",
                "Request has no host header".to_owned(),
            ),
            // Store internals stay in the logs.
            DomainError::Store(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "TENANT_STORE_UNAVAILABLE",
                "Organization store unavailable",
                "Organization lookup failed".to_owned(),
            ),
        };

        Problem::new(status, title, detail)
            .with_code(code)
            .with_trace_id(trace_id)
    }
}

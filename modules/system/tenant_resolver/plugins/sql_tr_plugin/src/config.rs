//! Configuration for the SQL tenant resolver plugin.

use serde::{Deserialize, Serialize};
use url::Url;

/// Stands in for a DSN password in printed configuration.
pub const REDACTED_PASSWORD: &str = "***REDACTED***";

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SqlTrPluginConfig {
    /// Database URL, e.g. `postgres://…` or `sqlite://nms.db?mode=rwc`.
    pub dsn: String,

    /// Upper bound of the connection pool. Forced to 1 for in-memory SQLite.
    pub max_connections: u32,

    /// Apply pending migrations on startup.
    pub run_migrations: bool,
}

impl Default for SqlTrPluginConfig {
    fn default() -> Self {
        Self {
            dsn: "sqlite::memory:".to_owned(),
            max_connections: 5,
            run_migrations: true,
        }
    }
}

impl SqlTrPluginConfig {
    /// Every pooled connection to `sqlite::memory:` opens its own empty
    /// database, so the pool must hold exactly one.
    #[must_use]
    pub fn is_in_memory_sqlite(&self) -> bool {
        self.dsn.starts_with("sqlite:") && self.dsn.contains(":memory:")
    }

    #[must_use]
    pub fn effective_max_connections(&self) -> u32 {
        if self.is_in_memory_sqlite() {
            1
        } else {
            self.max_connections.max(1)
        }
    }

    /// DSN safe to print: the password, if any, is replaced by
    /// [`REDACTED_PASSWORD`].
    ///
    /// A DSN carrying `@` that is not a URL with a host is hidden entirely.
    #[must_use]
    pub fn redacted_dsn(&self) -> String {
        if !self.dsn.contains('@') {
            return self.dsn.clone();
        }
        let Some(mut url) = Url::parse(&self.dsn).ok().filter(Url::has_host) else {
            return REDACTED_PASSWORD.to_owned();
        };
        if url.password().is_some() && url.set_password(Some(REDACTED_PASSWORD)).is_err() {
            return REDACTED_PASSWORD.to_owned();
        }
        url.into()
    }
}

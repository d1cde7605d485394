//! Layered application configuration.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. YAML file (`--config`)
//! 3. environment (`APP__SECTION__KEY`)
//! 4. CLI overrides (`--port`, `-v`)

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use sql_tr_plugin::SqlTrPluginConfig;
use static_tr_plugin::StaticTrPluginConfig;
use tenant_resolver_gw::TenantResolverGwConfig;
use tracing_subscriber::filter::LevelFilter;

/// Prefix of environment overrides; nested keys are split on `__`.
pub const ENV_PREFIX: &str = "APP__";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub tenant_resolver: TenantResolverGwConfig,
    /// Which store backs organization lookups.
    pub tenant_store: TenantStoreKind,
    pub static_tr_plugin: StaticTrPluginConfig,
    pub sql_tr_plugin: SqlTrPluginConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8087)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `info,tenant_resolver_gw=debug`.
    /// `RUST_LOG` wins when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantStoreKind {
    /// Organizations listed under `static_tr_plugin`.
    #[default]
    Static,
    /// Organization tables reached through `sql_tr_plugin.dsn`.
    Sql,
}

impl TenantStoreKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Sql => "sql",
        }
    }
}

impl AppConfig {
    /// Figment with every file and environment layer merged.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load defaults, then the YAML file (if any), then the environment.
    ///
    /// # Errors
    /// Fails on unknown keys, malformed values or an unreadable file.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::figment(path)
            .extract()
            .context("failed to load configuration")
    }

    /// Apply command-line overrides on top of the loaded layers.
    ///
    /// `-v` only ever raises the default level; per-target directives are
    /// left alone.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>, verbose: u8) {
        if let Some(port) = port {
            self.server.bind_addr.set_port(port);
        }
        let floor = match verbose {
            0 => return,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        self.logging.level = raise_default_level(&self.logging.level, floor);
    }

    /// Effective configuration as pretty JSON, with secrets redacted.
    ///
    /// # Errors
    /// Fails only if serialization fails.
    pub fn to_json(&self) -> anyhow::Result<String> {
        let mut shown = self.clone();
        shown.sql_tr_plugin.dsn = self.sql_tr_plugin.redacted_dsn();
        Ok(serde_json::to_string_pretty(&shown)?)
    }
}

/// Raises the bare level directive of `directives` to at least `floor`,
/// prepending one when there is none.
fn raise_default_level(directives: &str, floor: LevelFilter) -> String {
    let mut has_default = false;
    let mut parts: Vec<String> = directives
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| match d.parse::<LevelFilter>() {
            Ok(level) => {
                has_default = true;
                level.max(floor).to_string().to_ascii_lowercase()
            }
            Err(_) => d.to_owned(),
        })
        .collect();
    if !has_default {
        parts.insert(0, floor.to_string().to_ascii_lowercase());
    }
    parts.join(",")
}

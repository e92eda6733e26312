use std::path::Path;

use anon_auth::AnonAuthConfig;
use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use rsvp::RsvpConfig;
use serde::{Deserialize, Serialize};

/// Prefix of environment overrides, e.g. `SHOWER__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "SHOWER__";

const MOCK_DATABASE_URL: &str = "sqlite::memory:";

/// Effective server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub auth: AnonAuthConfig,
    pub rsvp: RsvpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    /// Browser origins allowed to call the API. Empty allows any origin.
    pub cors_origins: Vec<String>,
    /// How long open connections (live feeds included) may linger after a
    /// shutdown signal.
    pub shutdown_timeout: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_owned(),
            port: 8087,
            cors_origins: Vec::new(),
            shutdown_timeout: "10s".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Connection URL, e.g. `sqlite://shower.db?mode=rwc` or `postgres://...`.
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://shower.db?mode=rwc".to_owned(),
            max_connections: 5,
            connect_timeout: "5s".to_owned(),
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
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

/// Command-line flags that take precedence over every config layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub verbose: u8,
    pub mock: bool,
}

impl AppConfig {
    /// Layered load: defaults, then the YAML file (if any), then
    /// `SHOWER__*` environment variables.
    ///
    /// # Errors
    /// Returns an error if a layer does not parse or names an unknown key.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment
            .extract()
            .context("failed to load configuration")
    }

    pub fn apply_cli_overrides(&mut self, cli: CliOverrides) {
        if let Some(port) = cli.port {
            self.server.port = port;
        }

        match cli.verbose {
            0 => {}
            1 => "info".clone_into(&mut self.logging.level),
            2 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }

        if cli.mock {
            MOCK_DATABASE_URL.clone_into(&mut self.database.url);
            self.database.max_connections = 1;
        }
    }

    /// Pretty JSON rendering; the auth secret is never included.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to render configuration")
    }
}

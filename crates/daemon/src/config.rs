//! Daemon configuration
//!
//! Loaded from an optional `simplq.toml` and then `SIMPLQ_*` environment
//! variables (e.g. `SIMPLQ_RPC_PORT=9700`, `SIMPLQ_LOCK_SCOPE=per_queue`).

use serde::Deserialize;
use simplq_api_rpc::server::{DEFAULT_RPC_HOST, DEFAULT_RPC_PORT};
use simplq_core::application::LockScope;
use simplq_core::error::{AppError, Result};
use simplq_infra_sqlite::DEFAULT_MAX_CONNECTIONS;
use std::path::Path;

const DEFAULT_DATABASE_URL: &str = "~/.simplq/simplq.db";
const CONFIG_FILE: &str = "simplq";
const ENV_PREFIX: &str = "SIMPLQ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DaemonConfig {
    /// SQLite file path or `sqlite:` URL. A leading `~` is expanded.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_rpc_host")]
    pub rpc_host: String,
    #[serde(default = "default_rpc_port")]
    pub rpc_port: u16,
    #[serde(default)]
    pub lock_scope: LockScope,
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            rpc_host: default_rpc_host(),
            rpc_port: default_rpc_port(),
            lock_scope: LockScope::default(),
            log_format: LogFormat::default(),
            max_connections: default_max_connections(),
        }
    }
}

impl DaemonConfig {
    /// Load from `simplq.toml` (if present) and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load from the given config file stem (extension optional) and the environment.
    pub fn load_from(file: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build config: {}", e)))?;

        let mut loaded: Self = settings
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize config: {}", e)))?;

        loaded.database_url = shellexpand::tilde(&loaded.database_url).into_owned();
        loaded.validate()?;
        Ok(loaded)
    }

    fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            return Err(AppError::Config("database_url is empty".to_string()));
        }
        if self.max_connections == 0 {
            return Err(AppError::Config(
                "max_connections must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Filesystem path of the database, if it is file-backed.
    pub fn database_file(&self) -> Option<&Path> {
        let url = self.database_url.as_str();
        if url.contains(":memory:") {
            return None;
        }
        let path = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url);
        let path = path.split('?').next().unwrap_or(path);
        Some(Path::new(path))
    }
}

fn default_database_url() -> String {
    shellexpand::tilde(DEFAULT_DATABASE_URL).into_owned()
}

fn default_rpc_host() -> String {
    DEFAULT_RPC_HOST.to_string()
}

fn default_rpc_port() -> u16 {
    DEFAULT_RPC_PORT
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

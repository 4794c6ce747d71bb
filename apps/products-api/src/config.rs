//! Configuration for Products API

use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
///
/// Composes shared config components from the `core_config` and `database`
/// libraries.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub shutdown_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // DATABASE_URL must be set
        let server = ServerConfig::from_env()?; // HOST/PORT default 0.0.0.0:3456

        let shutdown_timeout_secs = core_config::env_or_default("SHUTDOWN_TIMEOUT_SECS", "30")
            .parse()
            .unwrap_or(30);

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            shutdown_timeout_secs,
        })
    }
}

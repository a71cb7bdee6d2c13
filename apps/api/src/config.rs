//! Configuration for the ShelfLine API

use core_config::{env_or_default, server::ServerConfig, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub environment: Environment,
    /// Username for the seeded administrator account
    pub admin_username: String,
    /// Password for the seeded administrator account
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        Ok(Self {
            server,
            environment,
            admin_username: env_or_default("SHELFLINE_ADMIN_USER", "admin"),
            admin_password: env_or_default("SHELFLINE_ADMIN_PASSWORD", "admin123"),
        })
    }
}

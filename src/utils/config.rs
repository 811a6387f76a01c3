use dotenv::dotenv;
use std::env;
use std::sync::OnceLock;
use thiserror::Error;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

const DEFAULT_DATABASE_NAME: &str = "petfinder";
const DEFAULT_COLLECTION: &str = "lostPets";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_name: String,
    pub lost_pets_collection: String,
    pub bind_address: String,
    pub log_level: String,
}

impl AppConfig {

    /// Loads the process-wide configuration once. Later calls return the
    /// same instance without touching the environment again.
    pub fn global() -> Result<&'static AppConfig, ConfigError> {
        if let Some(config) = CONFIG.get() {
            return Ok(config);
        }

        dotenv().ok();
        let config = Self::from_env()?;
        Ok(CONFIG.get_or_init(|| config))
    }

    pub fn from_env() -> Result<AppConfig, ConfigError> {
        Ok(AppConfig {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL"))?,
            database_name: var_or("DATABASE_NAME", DEFAULT_DATABASE_NAME),
            lost_pets_collection: var_or("LOST_PETS_COLLECTION", DEFAULT_COLLECTION),
            bind_address: var_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            log_level: var_or("LOG_LEVEL", DEFAULT_LOG_LEVEL),
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

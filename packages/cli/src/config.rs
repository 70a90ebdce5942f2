use std::env;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid storage provider: {0}")]
    InvalidStorageProvider(String),
}

/// Which storage backend the server runs against
#[derive(Debug, Clone, PartialEq)]
pub enum StorageProvider {
    Memory, // Ephemeral, process-lifetime collection
    Sqlite, // Persistent database file
}

impl FromStr for StorageProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(StorageProvider::Memory),
            "sqlite" => Ok(StorageProvider::Sqlite),
            _ => Err(ConfigError::InvalidStorageProvider(s.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub storage_provider: StorageProvider,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_str = env::var("PORT").unwrap_or_else(|_| "4001".to_string());

        let port = port_str.parse::<u16>()?;

        // Validate port is in valid range
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:taskdeck.db".to_string());

        let storage_provider = env::var("TASKDECK_STORAGE")
            .unwrap_or_else(|_| "sqlite".to_string())
            .parse::<StorageProvider>()?;

        Ok(Config {
            port,
            database_url,
            storage_provider,
        })
    }
}

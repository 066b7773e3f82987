use std::{env, str::FromStr};

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Mongo,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StorageBackend::Mongo),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            other => Err(AppError::ValidationError(format!(
                "Unknown storage backend '{}'",
                other
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: SecretString,
    pub mongo_db_name: String,
    pub questions_collection: String,
    pub categories_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
    pub storage_backend: StorageBackend,
    pub seed_categories: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongo_conn_string: SecretString::from("mongodb://localhost:27017".to_string()),
            mongo_db_name: "trivia-local".to_string(),
            questions_collection: "questions".to_string(),
            categories_collection: "categories".to_string(),
            web_server_host: "localhost".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "*".to_string(),
            storage_backend: StorageBackend::Mongo,
            seed_categories: true,
        }
    }
}

impl Config {
    /// Reads the process environment. Unset variables fall back to defaults;
    /// an unrecognised `STORAGE_BACKEND` is an error.
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let storage_backend = match var("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None => defaults.storage_backend,
        };

        Ok(Self {
            mongo_conn_string: var("MONGO_CONN_STRING")
                .map(SecretString::from)
                .unwrap_or(defaults.mongo_conn_string),
            mongo_db_name: var("MONGO_DB_NAME").unwrap_or(defaults.mongo_db_name),
            questions_collection: var("QUESTIONS_COLLECTION")
                .unwrap_or(defaults.questions_collection),
            categories_collection: var("CATEGORIES_COLLECTION")
                .unwrap_or(defaults.categories_collection),
            web_server_host: var("WEB_SERVER_HOST").unwrap_or(defaults.web_server_host),
            web_server_port: var("WEB_SERVER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.web_server_port),
            cors_allowed_origin: var("CORS_ALLOWED_ORIGIN")
                .unwrap_or(defaults.cors_allowed_origin),
            storage_backend,
            seed_categories: var("SEED_CATEGORIES")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.seed_categories),
        })
    }

    /// Rejects configuration the server cannot start with.
    pub fn validate(&self) -> AppResult<()> {
        if self.mongo_db_name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "MONGO_DB_NAME must not be empty".to_string(),
            ));
        }

        if self.questions_collection.trim().is_empty()
            || self.categories_collection.trim().is_empty()
        {
            return Err(AppError::ValidationError(
                "Collection names must not be empty".to_string(),
            ));
        }

        if self.web_server_port == 0 {
            return Err(AppError::ValidationError(
                "WEB_SERVER_PORT must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_db_name: "trivia-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            storage_backend: StorageBackend::Memory,
            ..Self::default()
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

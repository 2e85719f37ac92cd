//! Configuration for Products API

use core_config::{env_or_default, env_parse, server::ServerConfig, AppInfo, ConfigError, FromEnv};
use database::mongodb::MongoConfig;
use domain_products::PRODUCTS_COLLECTION;
use std::time::Duration;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub mongodb: MongoConfig,
    pub products_collection: String,
    pub shutdown_timeout: Duration,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        let shutdown_timeout_secs = env_parse("SHUTDOWN_TIMEOUT_SECS", 30u64)?;

        Ok(Self {
            app: core_config::app_info!(),
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            mongodb: MongoConfig::from_env()?,
            products_collection: env_or_default("PRODUCTS_COLLECTION", PRODUCTS_COLLECTION),
            shutdown_timeout: Duration::from_secs(shutdown_timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONGODB_URL: (&str, Option<&str>) = ("MONGODB_URL", Some("mongodb://localhost:27017"));
    const MONGODB_DATABASE: (&str, Option<&str>) = ("MONGODB_DATABASE", Some("products"));

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars(
            [
                MONGODB_URL,
                MONGODB_DATABASE,
                ("PRODUCTS_COLLECTION", None),
                ("SHUTDOWN_TIMEOUT_SECS", None),
                ("PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "products_api");
                assert_eq!(config.products_collection, "products");
                assert_eq!(config.shutdown_timeout, Duration::from_secs(30));
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.mongodb.database(), "products");
            },
        );
    }

    #[test]
    fn test_config_overrides() {
        temp_env::with_vars(
            [
                MONGODB_URL,
                MONGODB_DATABASE,
                ("PRODUCTS_COLLECTION", Some("inventory")),
                ("SHUTDOWN_TIMEOUT_SECS", Some("5")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.products_collection, "inventory");
                assert_eq!(config.shutdown_timeout, Duration::from_secs(5));
            },
        );
    }

    #[test]
    fn test_config_invalid_shutdown_timeout() {
        temp_env::with_vars(
            [
                MONGODB_URL,
                MONGODB_DATABASE,
                ("SHUTDOWN_TIMEOUT_SECS", Some("soon")),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("SHUTDOWN_TIMEOUT_SECS"));
            },
        );
    }

    #[test]
    fn test_config_requires_mongodb_url() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None),
                ("MONGO_URL", None),
                MONGODB_DATABASE,
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(matches!(err, ConfigError::MissingEnvVar(_)));
            },
        );
    }
}

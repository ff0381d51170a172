//! User service configuration.

use std::env;

use common::{env_parse, HashingConfig, ServiceConfig};

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Service name and log level
    pub service: ServiceConfig,
    /// Argon2 cost parameters
    pub hashing: HashingConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                service_name: env::var("USER_SERVICE_NAME")
                    .unwrap_or(defaults.service.service_name),
                log_level: env::var("USER_SERVICE_LOG_LEVEL")
                    .or_else(|_| env::var("RUST_LOG"))
                    .unwrap_or(defaults.service.log_level),
            },
            hashing: HashingConfig {
                memory_kib: env_parse("USER_SERVICE_HASH_MEMORY_KIB")
                    .unwrap_or(defaults.hashing.memory_kib),
                iterations: env_parse("USER_SERVICE_HASH_ITERATIONS")
                    .unwrap_or(defaults.hashing.iterations),
                parallelism: env_parse("USER_SERVICE_HASH_PARALLELISM")
                    .unwrap_or(defaults.hashing.parallelism),
            },
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "user-service".to_string(),
                log_level: "info".to_string(),
            },
            hashing: HashingConfig::default(),
        }
    }
}

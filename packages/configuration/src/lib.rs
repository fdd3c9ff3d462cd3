//! Configuration data structures for [Torrust Hyper Collection](https://docs.rs/torrust-hyper-collection).
//!
//! This module contains the configuration data structures for the collection
//! evaluator: the policy applied to every collection request and the logging
//! settings of the console application.
//!
//! The current version for configuration is [`v1`].
//!
//! The configuration is loaded from the first of these sources that is
//! present:
//!
//! 1. The environment variable `TORRUST_HYPER_COLLECTION_CONFIG_TOML`, which
//!    contains the whole TOML document.
//! 2. The file whose path is in `TORRUST_HYPER_COLLECTION_CONFIG_TOML_PATH`.
//! 3. The default configuration file. A missing file means default values.
//!
//! Single options can be overridden afterwards with environment variables
//! prefixed with `TORRUST_HYPER_COLLECTION_CONFIG_OVERRIDE_`, using `__` to
//! separate nested keys. For example:
//!
//! ```text
//! TORRUST_HYPER_COLLECTION_CONFIG_OVERRIDE_COLLECTION__MAX_LIMIT=100
//! ```
pub mod v1;
pub mod validator;

use std::env;
use std::panic::Location;
use std::sync::Arc;

use thiserror::Error;

use crate::validator::SemanticValidationError;

// Environment variables

/// The whole `hyper-collection.toml` file content. It has priority over the
/// config file, even if the file is not on the default path.
pub const ENV_VAR_CONFIG_TOML: &str = "TORRUST_HYPER_COLLECTION_CONFIG_TOML";

/// The `hyper-collection.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "TORRUST_HYPER_COLLECTION_CONFIG_TOML_PATH";

/// Prefix of the environment variables overriding single options.
pub const CONFIG_OVERRIDE_PREFIX: &str = "TORRUST_HYPER_COLLECTION_CONFIG_OVERRIDE_";

/// Path separator in the names of the override environment variables.
pub const CONFIG_OVERRIDE_SEPARATOR: &str = "__";

pub type Configuration = v1::Configuration;
pub type CollectionPolicy = v1::collection::CollectionPolicy;
pub type Logging = v1::logging::Logging;
pub type Threshold = v1::logging::Threshold;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Build Configuration Info
    ///
    /// Messages go to `stderr` because logging is not initialized yet and
    /// `stdout` is reserved for the application output.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to obtain a configuration.
    ///
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(default_config_toml_path: String) -> Result<Self, Error> {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            eprintln!("Loading configuration from environment variable:\n {config_toml}");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            eprintln!("Loading configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            eprintln!("Loading configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Ok(Self {
            config_toml,
            config_toml_path,
        })
    }

    /// Configuration info for an in-memory TOML document.
    #[must_use]
    pub fn from_toml(config_toml: &str) -> Self {
        Self {
            config_toml: Some(config_toml.to_owned()),
            config_toml_path: String::new(),
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Unable to load or deserialize the configuration.
    #[error("Failed processing the configuration: {source}, {location}")]
    ConfigError {
        location: &'static Location<'static>,
        source: Arc<figment::Error>,
    },

    /// The configuration was loaded but some options are incompatible.
    #[error("Invalid configuration: {source}, {location}")]
    Invalid {
        location: &'static Location<'static>,
        source: SemanticValidationError,
    },
}

impl From<figment::Error> for Error {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        Self::ConfigError {
            location: Location::caller(),
            source: Arc::new(err),
        }
    }
}

impl From<SemanticValidationError> for Error {
    #[track_caller]
    fn from(err: SemanticValidationError) -> Self {
        Self::Invalid {
            location: Location::caller(),
            source: err,
        }
    }
}

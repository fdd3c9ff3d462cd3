//! Version `1` for [Torrust Hyper Collection](https://docs.rs/torrust-hyper-collection)
//! configuration data structures.
//!
//! This module contains the configuration data structures for the
//! collection evaluator and the console application.
//!
//! # Sections
//!
//! - [`logging`]: logging threshold of the console application.
//! - [`collection`]: the policy applied to every collection request.
//!
//! # Default configuration
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [collection]
//! null_ordering = "last"
//! default_details = "minimal"
//! ```
//!
//! A bounded configuration, where clients get pages of 25 items unless they
//! ask otherwise and can never ask for more than 100 items:
//!
//! ```toml
//! [collection]
//! default_limit = 25
//! max_limit = 100
//! null_ordering = "first"
//! default_details = "all"
//! ```
pub mod collection;
pub mod logging;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::collection::CollectionPolicy;
use self::logging::Logging;
use crate::validator::{SemanticValidationError, Validator};
use crate::{Error, Info, CONFIG_OVERRIDE_PREFIX, CONFIG_OVERRIDE_SEPARATOR};

/// Core configuration for the collection evaluator.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    /// Logging configuration
    #[serde(default = "Configuration::default_logging")]
    pub logging: Logging,

    /// Collection policy configuration.
    #[serde(default = "Configuration::default_collection")]
    pub collection: CollectionPolicy,
}

impl Configuration {
    fn default_logging() -> Logging {
        Logging::default()
    }

    fn default_collection() -> CollectionPolicy {
        CollectionPolicy::default()
    }

    /// Loads the configuration from the `Info` struct.
    ///
    /// The TOML document in `info` has priority over the configuration file.
    /// Options can be overridden afterwards with environment variables.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration can not be deserialized or it
    /// is not semantically valid.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = if let Some(config_toml) = &info.config_toml {
            Figment::from(Toml::string(config_toml))
        } else {
            Figment::from(Toml::file(&info.config_toml_path))
        };

        let figment = figment.merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR));

        let config: Configuration = figment.extract()?;

        config.validate()?;

        Ok(config)
    }

    /// Loads the configuration from the configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `path` has a bad configuration.
    pub fn load_from_file(path: &str) -> Result<Configuration, Error> {
        Self::load(&Info {
            config_toml: None,
            config_toml_path: path.to_owned(),
        })
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration can not be encoded.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

impl Validator for Configuration {
    fn validate(&self) -> Result<(), SemanticValidationError> {
        self.collection.validate()
    }
}

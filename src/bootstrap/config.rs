//! Initialize configuration from file or env var.
//!
//! All environment variables are prefixed with `TORRUST_HYPER_COLLECTION_`.
use torrust_hyper_collection_configuration::{Configuration, Error, Info};

// Default values
pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/hyper-collection.toml";

/// It loads the application configuration from the environment.
///
/// There are two methods to inject the configuration:
///
/// 1. By using a config file: `hyper-collection.toml`.
/// 2. Environment variable: `TORRUST_HYPER_COLLECTION_CONFIG_TOML`. The variable contains the same contents as the `hyper-collection.toml` file.
///
/// Environment variable has priority over the config file.
///
/// Refer to the [configuration documentation](https://docs.rs/torrust-hyper-collection-configuration) for the configuration options.
///
/// # Errors
///
/// Will return an error if the configuration can not be loaded or it is not
/// valid.
pub fn initialize_configuration() -> Result<Configuration, Error> {
    let info = Info::new(DEFAULT_PATH_CONFIG.to_string())?;

    Configuration::load(&info)
}

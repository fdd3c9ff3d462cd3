use torrust_hyper_collection_configuration::{CollectionPolicy, Configuration, Threshold};
use torrust_hyper_collection_primitives::NullOrdering;

/// This configuration is used for testing. Logging is disabled and the
/// collection policy is the default one, so pages are unbounded unless the
/// request sets a `limit`.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `Debug` for tests debugging

    config
}

/// Ephemeral configuration with a default page size and a maximum limit.
#[must_use]
pub fn ephemeral_bounded(default_limit: usize, max_limit: usize) -> Configuration {
    let mut config = ephemeral();

    config.collection = CollectionPolicy {
        default_limit: Some(default_limit),
        max_limit: Some(max_limit),
        ..config.collection
    };

    config
}

/// Ephemeral configuration with the given policy for resources missing the
/// sort attribute.
#[must_use]
pub fn ephemeral_with_null_ordering(null_ordering: NullOrdering) -> Configuration {
    let mut config = ephemeral();

    config.collection.null_ordering = null_ordering;

    config
}

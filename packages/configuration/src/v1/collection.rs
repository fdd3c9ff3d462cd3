use derive_more::Constructor;
use serde::{Deserialize, Serialize};
use torrust_hyper_collection_primitives::{Details, NullOrdering};

use crate::validator::{SemanticValidationError, Validator};

/// Policy applied by the evaluator to every collection request.
#[allow(clippy::module_name_repetitions)]
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Constructor)]
pub struct CollectionPolicy {
    /// Page size used when the request does not include a `limit`. Without a
    /// default limit the page runs to the end of the collection.
    #[serde(default = "CollectionPolicy::default_default_limit")]
    pub default_limit: Option<usize>,

    /// Largest `limit` a client may request. Requests above it are rejected,
    /// they are never clamped.
    #[serde(default = "CollectionPolicy::default_max_limit")]
    pub max_limit: Option<usize>,

    /// Where resources without a value for the sort attribute are placed.
    /// Possible values are: `first`, `last` and `reject`.
    #[serde(default = "CollectionPolicy::default_null_ordering")]
    pub null_ordering: NullOrdering,

    /// Detail level used when the request does not include `details`.
    #[serde(default = "CollectionPolicy::default_default_details")]
    pub default_details: Details,
}

impl Default for CollectionPolicy {
    fn default() -> Self {
        Self {
            default_limit: Self::default_default_limit(),
            max_limit: Self::default_max_limit(),
            null_ordering: Self::default_null_ordering(),
            default_details: Self::default_default_details(),
        }
    }
}

impl CollectionPolicy {
    #[allow(clippy::unnecessary_wraps)]
    fn default_default_limit() -> Option<usize> {
        None
    }

    #[allow(clippy::unnecessary_wraps)]
    fn default_max_limit() -> Option<usize> {
        None
    }

    fn default_null_ordering() -> NullOrdering {
        NullOrdering::Last
    }

    fn default_default_details() -> Details {
        Details::Minimal
    }
}

impl Validator for CollectionPolicy {
    fn validate(&self) -> Result<(), SemanticValidationError> {
        if let (Some(default_limit), Some(max_limit)) = (self.default_limit, self.max_limit) {
            if default_limit > max_limit {
                return Err(SemanticValidationError::DefaultLimitAboveMaximum {
                    default_limit,
                    max_limit,
                });
            }
        }

        Ok(())
    }
}

//! Error returned by the collection [`Evaluator`](crate::core::evaluator::Evaluator).
//!
//! There is only one kind of error, `InvalidParameter`, which carries the name
//! of the offending query parameter and the reason why it was rejected:
//!
//! Reason | Parameter | Description
//! ---|---|---
//! `UnknownParameter` | any | The name is not one of `sort`, `reverse`, `limit`, `offset` or `details`.
//! `Duplicated` | any | The parameter was given more than once (names are compared ignoring the case).
//! `Malformed` | `reverse`, `limit`, `offset` | The value can not be parsed.
//! `Negative` | `limit`, `offset` | The value is a negative integer.
//! `UnknownDetails` | `details` | The value is neither `minimal` nor `all`.
//! `UnknownAttribute` | `sort` | The collection can not be ordered by that attribute.
//! `MissingAttribute` | `sort` | A resource has no value for the attribute and the policy rejects it.
//! `LimitAboveMaximum` | `limit` | The requested page size is above the configured maximum.
//!
//! Invalid values are never corrected silently. The only value adjusted by the
//! evaluator is an `offset` past the end of the collection, which is a valid
//! boundary condition that yields an empty page.
use torrust_hyper_collection_primitives::details::ParseDetailsError;
use tracing::debug;

/// Error returned when a collection request can not be evaluated.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: Reason },
}

/// Why a query parameter was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    #[error("unknown parameter, expected one of `sort`, `reverse`, `limit`, `offset` or `details`")]
    UnknownParameter,

    #[error("the parameter is given more than once")]
    Duplicated,

    #[error("malformed value \"{value}\", expected {expected}")]
    Malformed { value: String, expected: &'static str },

    #[error("negative value \"{value}\", expected a non-negative integer")]
    Negative { value: String },

    #[error("{0}")]
    UnknownDetails(ParseDetailsError),

    #[error("the collection can not be sorted by \"{attribute}\"")]
    UnknownAttribute { attribute: String },

    #[error("the resource \"{key}\" has no value for the sort attribute \"{attribute}\"")]
    MissingAttribute { attribute: String, key: String },

    #[error("limit {limit} is above the maximum of {max_limit}")]
    LimitAboveMaximum { limit: usize, max_limit: usize },
}

impl Error {
    #[must_use]
    pub fn invalid_parameter(name: &str, reason: Reason) -> Self {
        let err = Self::InvalidParameter {
            name: name.to_owned(),
            reason,
        };
        debug!("{err}");
        err
    }

    /// The reason why the parameter was rejected.
    #[must_use]
    pub fn reason(&self) -> &Reason {
        match self {
            Self::InvalidParameter { reason, .. } => reason,
        }
    }
}

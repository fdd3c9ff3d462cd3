use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Where resources without a value for the sort attribute are placed.
///
/// The policy describes the ascending order. Reversing a page reverses the
/// whole sorted order, so `Last` resources come first in a reversed page.
#[derive(Hash, Clone, Copy, Debug, Default, Display, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NullOrdering {
    /// Missing values sort before every present value.
    #[display("first")]
    First,
    /// Missing values sort after every present value.
    #[default]
    #[display("last")]
    Last,
    /// A missing value is an invalid sort request.
    #[display("reject")]
    Reject,
}

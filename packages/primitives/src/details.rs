//! Detail level of the items returned in a collection page.
use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How much of every resource a collection page includes.
#[derive(Hash, Clone, Copy, Debug, Default, Display, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Details {
    /// Only the stable reference of each resource.
    #[default]
    #[display("minimal")]
    Minimal,
    /// The full resource body.
    #[display("all")]
    All,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown details level \"{value}\", expected `minimal` or `all`")]
pub struct ParseDetailsError {
    pub value: String,
}

impl FromStr for Details {
    type Err = ParseDetailsError;

    /// Values are matched case-insensitively: `Minimal`, `ALL` and `all` are
    /// all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("minimal") {
            Ok(Self::Minimal)
        } else if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Err(ParseDetailsError { value: s.to_owned() })
        }
    }
}

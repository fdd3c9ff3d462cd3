//! Resources and the attributes collections are sorted by.
//!
//! A [`Resource`] is an opaque record for the evaluator. It only needs two
//! things from it:
//!
//! - A stable reference (its `key`), returned instead of the whole resource
//!   when a client asks for `minimal` details.
//! - The value of the attribute a client sorts the collection by.
//!
//! The full body is whatever the resource serializes to, and it is only
//! returned when a client asks for `all` details.
//!
//! ```rust
//! use serde::Serialize;
//! use torrust_hyper_collection::core::resource::{AttributeValue, Resource, Schema};
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! impl Resource for User {
//!     fn key(&self) -> String {
//!         format!("/users/{}", self.id)
//!     }
//!
//!     fn attribute(&self, name: &str) -> Option<AttributeValue> {
//!         match name {
//!             "id" => Some(self.id.into()),
//!             "name" => Some(self.name.as_str().into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let schema = Schema::new(["id", "name"]);
//!
//! assert_eq!(schema.resolve("NAME"), Some("name"));
//! ```
use std::cmp::Ordering;

use serde::Serialize;

/// A single addressable domain object.
pub trait Resource: Serialize {
    /// The stable reference of the resource, usually its canonical path.
    fn key(&self) -> String;

    /// The value of the attribute `name`, where `name` is the canonical name
    /// declared in the collection [`Schema`].
    ///
    /// `None` means the resource has no value (or a null value) for it.
    fn attribute(&self, name: &str) -> Option<AttributeValue>;
}

impl<R: Resource + ?Sized> Resource for &R {
    fn key(&self) -> String {
        (**self).key()
    }

    fn attribute(&self, name: &str) -> Option<AttributeValue> {
        (**self).attribute(name)
    }
}

/// A value resources can be ordered by.
///
/// Values of different kinds are ordered by kind: booleans first, then
/// numbers and then text. Numbers are compared by their exact value, whatever
/// their representation, so `2` equals `2.0` and `-0.0` equals `0.0`.
/// Infinities come before and after every finite number, and NaN values
/// beyond them according to their sign.
#[derive(Debug, Clone)]
pub enum AttributeValue {
    Bool(bool),
    /// Any signed or unsigned 64-bit integer.
    Integer(i128),
    Float(f64),
    Text(String),
}

impl AttributeValue {
    fn rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Integer(_) | Self::Float(_) => 1,
            Self::Text(_) => 2,
        }
    }
}

fn compare_floats(a: f64, b: f64) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => a.total_cmp(&b),
    }
}

/// `2^127`, the first float above every `i128`.
#[allow(clippy::cast_precision_loss)]
const I128_UPPER_BOUND: f64 = i128::MAX as f64;

#[allow(clippy::cast_possible_truncation)]
fn compare_integer_with_float(integer: i128, float: f64) -> Ordering {
    if float.is_nan() {
        return if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }

    let floor = float.floor();

    if floor >= I128_UPPER_BOUND {
        return Ordering::Less;
    }
    if floor < -I128_UPPER_BOUND {
        return Ordering::Greater;
    }

    // `floor` is integral and in range, so the cast is exact.
    match integer.cmp(&(floor as i128)) {
        Ordering::Equal if float > floor => Ordering::Less,
        ordering => ordering,
    }
}

impl Ord for AttributeValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => compare_floats(*a, *b),
            (Self::Integer(a), Self::Float(b)) => compare_integer_with_float(*a, *b),
            (Self::Float(a), Self::Integer(b)) => compare_integer_with_float(*b, *a).reverse(),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for AttributeValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for AttributeValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AttributeValue {}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<u64> for AttributeValue {
    fn from(value: u64) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// The attributes a collection can be sorted by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    attributes: Vec<String>,
}

impl Schema {
    #[must_use]
    pub fn new<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Returns the canonical name of the attribute `name`, ignoring the case.
    ///
    /// An exact match wins over a case-insensitive one, so a schema may still
    /// declare attributes differing only in case.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| *attribute == name)
            .or_else(|| self.attributes.iter().find(|attribute| eq_ignore_case(attribute, name)))
            .map(String::as_str)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().flat_map(char::to_lowercase).eq(b.chars().flat_map(char::to_lowercase))
}

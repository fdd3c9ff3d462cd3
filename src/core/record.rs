//! Schemaless JSON records.
//!
//! A [`Record`] is a resource backed by a JSON object, useful when the
//! collection comes from a document store or a file rather than from typed
//! domain objects. One of its attributes is its stable key.
//!
//! The schema of a set of records is the union of their attribute names, so
//! a collection can be sorted by an attribute only some records have. JSON
//! `null`, arrays and objects are treated as missing values when sorting.
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

use super::resource::{AttributeValue, Resource, Schema};

/// A JSON object resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    key: String,
    body: Map<String, Value>,
}

/// Errors building a record from a JSON value.
#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("record #{position} is not a JSON object")]
    NotAnObject { position: usize },

    #[error("record #{position} has no \"{attribute}\" key attribute")]
    MissingKey { position: usize, attribute: String },

    #[error("the \"{attribute}\" key attribute of record #{position} must be a string or a number")]
    InvalidKey { position: usize, attribute: String },
}

impl Record {
    /// Builds a record from a JSON object using `key_attribute` as its key.
    ///
    /// # Errors
    ///
    /// Will return an error if `value` is not an object, or if the key
    /// attribute is missing or is neither a string nor a number.
    pub fn from_value(position: usize, value: Value, key_attribute: &str) -> Result<Self, RecordError> {
        let Value::Object(body) = value else {
            return Err(RecordError::NotAnObject { position });
        };

        let key = match body.get(key_attribute) {
            Some(Value::String(key)) => key.clone(),
            Some(Value::Number(key)) => key.to_string(),
            Some(_) => {
                return Err(RecordError::InvalidKey {
                    position,
                    attribute: key_attribute.to_owned(),
                })
            }
            None => {
                return Err(RecordError::MissingKey {
                    position,
                    attribute: key_attribute.to_owned(),
                })
            }
        };

        Ok(Self { key, body })
    }

    /// Builds records from a JSON array of objects.
    ///
    /// # Errors
    ///
    /// Will return the error of the first value that is not a valid record.
    pub fn from_values(values: Vec<Value>, key_attribute: &str) -> Result<Vec<Self>, RecordError> {
        values
            .into_iter()
            .enumerate()
            .map(|(position, value)| Self::from_value(position, value, key_attribute))
            .collect()
    }

    #[must_use]
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// The union of the attribute names of `records`, in order of first
    /// appearance.
    #[must_use]
    pub fn schema(records: &[Record]) -> Schema {
        let mut attributes: Vec<&str> = Vec::new();

        for record in records {
            for attribute in record.body.keys() {
                if !attributes.contains(&attribute.as_str()) {
                    attributes.push(attribute);
                }
            }
        }

        Schema::new(attributes)
    }
}

impl Resource for Record {
    fn key(&self) -> String {
        self.key.clone()
    }

    fn attribute(&self, name: &str) -> Option<AttributeValue> {
        match self.body.get(name)? {
            Value::Bool(value) => Some(AttributeValue::Bool(*value)),
            Value::Number(number) => number
                .as_i64()
                .map(AttributeValue::from)
                .or_else(|| number.as_u64().map(AttributeValue::from))
                .or_else(|| number.as_f64().map(AttributeValue::from)),
            Value::String(text) => Some(AttributeValue::Text(text.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.body.serialize(serializer)
    }
}

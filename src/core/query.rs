//! The query parameters of a collection request.
//!
//! Name | Type | Description | Default | Example
//! ---|---|---|---|---
//! `sort` | attribute name | Attribute the collection is ordered by, ascending | original order | `name`
//! `reverse` | boolean | Invert the order | `false` | `true`
//! `limit` | non-negative integer | Page size. `0` only returns the metadata | policy default | `10`
//! `offset` | non-negative integer | Number of leading items to skip | `0` | `50`
//! `details` | `minimal` or `all` | References only, or full resources | policy default | `all`
//!
//! Parameter names and the values of `reverse` and `details` are matched
//! ignoring the case, so `?Sort=name&REVERSE=True&details=ALL` is a valid
//! request. Parameters with an empty value are treated as if they were not
//! given.
//!
//! Unknown names, repeated names, malformed values and negative numbers are
//! rejected with an [`InvalidParameter`](crate::core::error::Error::InvalidParameter)
//! error.
use std::str::FromStr;

use torrust_hyper_collection_primitives::{Details, Pagination};
use url::form_urlencoded;

use super::error::{Error, Reason};

/// A validated collection request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// The attribute the collection is sorted by.
    pub sort: Option<String>,
    /// Whether the order is inverted.
    pub reverse: bool,
    /// The maximum number of items in the page.
    pub limit: Option<usize>,
    /// The number of leading items skipped.
    pub offset: usize,
    /// The detail level of the items. `None` leaves it to the evaluator
    /// policy.
    pub details: Option<Details>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parameter {
    Sort,
    Reverse,
    Limit,
    Offset,
    Details,
}

impl Parameter {
    const ALL: [Parameter; 5] = [Self::Sort, Self::Reverse, Self::Limit, Self::Offset, Self::Details];

    fn name(self) -> &'static str {
        match self {
            Self::Sort => "sort",
            Self::Reverse => "reverse",
            Self::Limit => "limit",
            Self::Offset => "offset",
            Self::Details => "details",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|parameter| parameter.name().eq_ignore_ascii_case(name))
    }
}

impl Query {
    #[must_use]
    pub fn sorted_by(mut self, attribute: &str) -> Self {
        self.sort = Some(attribute.to_owned());
        self
    }

    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    #[must_use]
    pub fn limited_to(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn starting_at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: Details) -> Self {
        self.details = Some(details);
        self
    }

    #[must_use]
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.offset, self.limit)
    }

    /// Builds a query from decoded key/value pairs.
    ///
    /// # Errors
    ///
    /// Will return an `InvalidParameter` error if a name is unknown or
    /// repeated, or if a value can not be parsed.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = Query::default();
        let mut seen: Vec<Parameter> = Vec::with_capacity(Parameter::ALL.len());

        for (name, value) in pairs {
            let name = name.as_ref();
            let value = value.as_ref();

            let Some(parameter) = Parameter::from_name(name) else {
                return Err(Error::invalid_parameter(name, Reason::UnknownParameter));
            };

            if seen.contains(&parameter) {
                return Err(Error::invalid_parameter(parameter.name(), Reason::Duplicated));
            }
            seen.push(parameter);

            if value.is_empty() {
                continue;
            }

            match parameter {
                Parameter::Sort => query.sort = Some(value.to_owned()),
                Parameter::Reverse => query.reverse = parse_bool(parameter, value)?,
                Parameter::Limit => query.limit = Some(parse_non_negative(parameter, value)?),
                Parameter::Offset => query.offset = parse_non_negative(parameter, value)?,
                Parameter::Details => {
                    query.details = Some(
                        Details::from_str(value)
                            .map_err(|err| Error::invalid_parameter(parameter.name(), Reason::UnknownDetails(err)))?,
                    );
                }
            }
        }

        Ok(query)
    }

    /// Builds a query from a URL query string, with or without the leading
    /// `?`.
    ///
    /// # Errors
    ///
    /// Will return an `InvalidParameter` error under the same conditions as
    /// [`Query::from_pairs`].
    pub fn from_query_string(query_string: &str) -> Result<Self, Error> {
        let query_string = query_string.strip_prefix('?').unwrap_or(query_string);

        Self::from_pairs(form_urlencoded::parse(query_string.as_bytes()))
    }

    /// Encodes the query as a URL query string, without the leading `?`.
    ///
    /// Parameters without a value are left out.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        if let Some(sort) = &self.sort {
            serializer.append_pair(Parameter::Sort.name(), sort);
        }
        serializer.append_pair(Parameter::Reverse.name(), &self.reverse.to_string());
        if let Some(limit) = self.limit {
            serializer.append_pair(Parameter::Limit.name(), &limit.to_string());
        }
        serializer.append_pair(Parameter::Offset.name(), &self.offset.to_string());
        if let Some(details) = self.details {
            serializer.append_pair(Parameter::Details.name(), &details.to_string());
        }

        serializer.finish()
    }
}

fn parse_bool(parameter: Parameter, value: &str) -> Result<bool, Error> {
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        Ok(false)
    } else {
        Err(Error::invalid_parameter(
            parameter.name(),
            Reason::Malformed {
                value: value.to_owned(),
                expected: "`true` or `false`",
            },
        ))
    }
}

fn parse_non_negative(parameter: Parameter, value: &str) -> Result<usize, Error> {
    if let Ok(number) = value.parse::<usize>() {
        return Ok(number);
    }

    let is_negative_integer = value
        .strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit()));

    let reason = if is_negative_integer {
        Reason::Negative { value: value.to_owned() }
    } else {
        Reason::Malformed {
            value: value.to_owned(),
            expected: "a non-negative integer",
        }
    };

    Err(Error::invalid_parameter(parameter.name(), reason))
}

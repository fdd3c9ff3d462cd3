//! The response envelope wrapping a page of a collection.
//!
//! Every key is always present in the serialized envelope. Optional values
//! that are absent (`sort`, `limit`, `previous` and `next`) are serialized as
//! `null`:
//!
//! ```json
//! {
//!     "items": ["/users/7", "/users/3"],
//!     "sort": "name",
//!     "reverse": true,
//!     "limit": 2,
//!     "offset": 4,
//!     "previous": "?sort=name&reverse=true&limit=2&offset=2&details=minimal",
//!     "next": "?sort=name&reverse=true&limit=2&offset=6&details=minimal",
//!     "total": 200,
//!     "details": "minimal"
//! }
//! ```
use std::fmt;

use serde::{Serialize, Serializer};
use torrust_hyper_collection_primitives::Details;
use url::Url;

use super::query::Query;

/// A page of a collection plus the paging and sorting metadata.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub items: Vec<Item<T>>,
    pub sort: Option<String>,
    pub reverse: bool,
    pub limit: Option<usize>,
    pub offset: usize,
    pub previous: Option<Link>,
    pub next: Option<Link>,
    /// The size of the whole collection, independent of paging.
    pub total: usize,
    pub details: Details,
}

impl<T> Envelope<T> {
    /// Resolves the `previous` and `next` links against `base`, the URL of
    /// the collection.
    #[must_use]
    pub fn with_base(self, base: &Url) -> Self {
        Self {
            previous: self.previous.map(|link| link.with_base(base.clone())),
            next: self.next.map(|link| link.with_base(base.clone())),
            ..self
        }
    }

    /// The stable references of the items in the page.
    #[must_use]
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            Item::Reference(key) => Some(key.as_str()),
            Item::Full(_) => None,
        })
    }
}

/// An item of the page, rendered at the requested detail level.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Item<T> {
    /// `minimal` details: the stable reference of the resource.
    Reference(String),
    /// `all` details: the full resource.
    Full(T),
}

/// A link to another page of the same collection.
///
/// It is an opaque string for clients. Without a base URL it is a relative
/// query string, for example `?sort=name&reverse=false&limit=10&offset=10&details=all`.
/// The routing layer can resolve it against the collection URL with
/// [`Link::with_base`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    query: Query,
    base: Option<Url>,
}

impl Link {
    #[must_use]
    pub fn new(query: Query) -> Self {
        Self { query, base: None }
    }

    /// The request for the linked page.
    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    #[must_use]
    pub fn with_base(self, base: Url) -> Self {
        Self {
            base: Some(base),
            ..self
        }
    }

    /// The absolute URL of the linked page, using `base` as the collection
    /// URL. Any query string in `base` is replaced.
    #[must_use]
    pub fn to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_query(Some(&self.query.to_query_string()));
        url
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.base {
            Some(base) => write!(f, "{}", self.to_url(base)),
            None => write!(f, "?{}", self.query.to_query_string()),
        }
    }
}

impl Serialize for Link {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

//! The core `collection` module contains the logic to evaluate collection
//! requests, which is independent of the delivery layer.
//!
//! It does not specify how clients reach a collection. It is intended to be
//! used by higher layers like:
//!
//! - A REST API handler
//! - A command line tool (see [`console`](crate::console))
//!
//! ```text
//! Delivery layer     Domain layer
//!
//!     REST API |
//!      Console |> Evaluator -> Envelope
//! ```
//!
//! # Table of contents
//!
//! - [Collections](#collections)
//! - [Queries](#queries)
//! - [Envelopes](#envelopes)
//! - [Errors](#errors)
//! - [Configuration](#configuration)
//!
//! # Collections
//!
//! A collection is the full result set of a request before paging: a
//! snapshot of [`Resource`](resource::Resource)s plus the
//! [`Schema`](resource::Schema) of attributes it can be sorted by.
//!
//! ```rust
//! use serde::Serialize;
//! use torrust_hyper_collection::core::collection::Collection;
//! use torrust_hyper_collection::core::evaluator::evaluate;
//! use torrust_hyper_collection::core::query::Query;
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
//! let users = vec![
//!     User { id: 1, name: "carol".to_string() },
//!     User { id: 2, name: "alice".to_string() },
//!     User { id: 3, name: "bob".to_string() },
//! ];
//!
//! let collection = Collection::new(&users, Schema::new(["id", "name"]));
//!
//! let query = Query::from_query_string("?sort=NAME&limit=2").unwrap();
//!
//! let envelope = evaluate(&collection, &query).unwrap();
//!
//! assert_eq!(envelope.references().collect::<Vec<_>>(), vec!["/users/2", "/users/3"]);
//! assert_eq!(envelope.total, 3);
//! assert_eq!(
//!     envelope.next.unwrap().to_string(),
//!     "?sort=name&reverse=false&limit=2&offset=2&details=minimal"
//! );
//! ```
//!
//! Large collections should be paged by the data layer. A
//! [`Window`](collection::Window) holds the already sorted and offset page
//! plus the total computed separately, and
//! [`Evaluator::evaluate_window`](evaluator::Evaluator::evaluate_window)
//! builds the same envelope without materializing the collection.
//!
//! JSON documents can be used as resources with [`Record`](record::Record).
//!
//! # Queries
//!
//! A [`Query`](query::Query) is the typed form of the request parameters
//! `sort`, `reverse`, `limit`, `offset` and `details`. It is validated at the
//! boundary, when it is built from the request query string.
//!
//! # Envelopes
//!
//! The evaluator returns an [`Envelope`](envelope::Envelope):
//!
//! ```json
//! {
//!     "items": ["/users/51", "/users/52"],
//!     "sort": "name",
//!     "reverse": true,
//!     "limit": 2,
//!     "offset": 50,
//!     "previous": "?sort=name&reverse=true&limit=2&offset=48&details=minimal",
//!     "next": "?sort=name&reverse=true&limit=2&offset=52&details=minimal",
//!     "total": 200,
//!     "details": "minimal"
//! }
//! ```
//!
//! # Errors
//!
//! Every rejected request yields an
//! [`InvalidParameter`](error::Error::InvalidParameter) error naming the
//! offending parameter. See the [`error`] module for the reasons.
//!
//! # Configuration
//!
//! The [`Evaluator`](evaluator::Evaluator) applies a policy taken from the
//! configuration: default and maximum page sizes, the default detail level
//! and where resources without a value for the sort attribute go. Refer to
//! [torrust-hyper-collection-configuration](https://docs.rs/torrust-hyper-collection-configuration)
//! for the options.
pub mod collection;
pub mod envelope;
pub mod error;
pub mod evaluator;
pub mod query;
pub mod record;
pub mod resource;
pub mod sorting;

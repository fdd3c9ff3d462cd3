//! Primitive types for [Torrust Hyper Collection](https://docs.rs/torrust-hyper-collection).
//!
//! This module contains the basic data structures shared by the collection
//! evaluator and its configuration: the page requested by a client, the
//! detail level of the returned items and the policy used to order resources
//! without a value for the sort attribute.
pub mod details;
pub mod null_ordering;
pub mod pagination;

pub use details::Details;
pub use null_ordering::NullOrdering;
pub use pagination::Pagination;

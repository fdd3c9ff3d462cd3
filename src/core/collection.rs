//! Snapshots of the resources a collection request is evaluated on.
//!
//! - [`Collection`]: every resource matching the request, materialized in
//!   memory. The evaluator sorts and pages it.
//! - [`Window`]: a page already sorted and offset by the data layer, plus the
//!   size of the whole collection computed separately. Large collections
//!   should be paged at the source this way.
use super::resource::Schema;

/// An immutable snapshot of the whole collection, before paging.
#[derive(Debug, Clone)]
pub struct Collection<'a, R> {
    resources: &'a [R],
    schema: Schema,
}

impl<'a, R> Collection<'a, R> {
    #[must_use]
    pub fn new(resources: &'a [R], schema: Schema) -> Self {
        Self { resources, schema }
    }

    #[must_use]
    pub fn resources(&self) -> &'a [R] {
        self.resources
    }

    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

/// A page of a collection produced by the data layer.
///
/// `resources` must already follow the requested `sort` and `reverse`
/// options and start at the requested `offset`. It is consumed lazily: the
/// evaluator never takes more than `limit` items from it.
#[derive(Debug, Clone)]
pub struct Window<I> {
    resources: I,
    total: usize,
    schema: Schema,
}

impl<I> Window<I> {
    #[must_use]
    pub fn new(resources: I, total: usize, schema: Schema) -> Self {
        Self {
            resources,
            total,
            schema,
        }
    }

    /// The size of the whole collection, independent of paging.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub(crate) fn into_resources(self) -> I {
        self.resources
    }
}

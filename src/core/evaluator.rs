//! The collection query evaluator.
//!
//! Given an immutable snapshot of a collection and a validated [`Query`], the
//! evaluator:
//!
//! 1. Sorts the collection by the `sort` attribute, if any. The sort is
//!    stable and resources without a value are placed according to the
//!    [`NullOrdering`](torrust_hyper_collection_primitives::NullOrdering)
//!    policy.
//! 2. Reverses the sorted order when `reverse` is set.
//! 3. Counts the `total`, before paging.
//! 4. Skips `offset` items and keeps at most `limit` of the rest. An offset
//!    past the end yields an empty page.
//! 5. Links to the `previous` and `next` pages when they exist.
//! 6. Renders each item as a reference (`minimal`) or as the whole resource
//!    (`all`).
//!
//! The evaluator holds no state apart from its policy, so the same value can
//! be shared by any number of concurrent requests.
use derive_more::Constructor;
use torrust_hyper_collection_configuration::{CollectionPolicy, Configuration};
use torrust_hyper_collection_primitives::Details;
use tracing::debug;

use super::collection::{Collection, Window};
use super::envelope::{Envelope, Item, Link};
use super::error::{Error, Reason};
use super::query::Query;
use super::resource::{Resource, Schema};
use super::sorting::sort_by_attribute;

/// Evaluates collection requests with a fixed [`CollectionPolicy`].
#[derive(Debug, Clone, Copy, Default, Constructor)]
pub struct Evaluator {
    policy: CollectionPolicy,
}

impl Evaluator {
    #[must_use]
    pub fn from_configuration(configuration: &Configuration) -> Self {
        Self::new(configuration.collection)
    }

    #[must_use]
    pub fn policy(&self) -> &CollectionPolicy {
        &self.policy
    }

    /// Evaluates `query` on a materialized collection.
    ///
    /// # Errors
    ///
    /// Will return an `InvalidParameter` error if:
    ///
    /// - The `sort` attribute is not in the collection schema.
    /// - A resource has no value for the `sort` attribute and the policy
    ///   rejects missing values.
    /// - The `limit` is above the maximum allowed by the policy.
    pub fn evaluate<'a, R: Resource>(&self, collection: &Collection<'a, R>, query: &Query) -> Result<Envelope<&'a R>, Error> {
        let query = self.effective_query(collection.schema(), query)?;

        let mut ordered: Vec<&'a R> = collection.resources().iter().collect();

        if let Some(attribute) = &query.sort {
            sort_by_attribute(&mut ordered, attribute, self.policy.null_ordering)?;
        }

        if query.reverse {
            ordered.reverse();
        }

        let total = ordered.len();
        let window = query.pagination().window(total);

        debug!(
            "evaluating {query:?} on a collection of {total} resources, returning positions {window:?}"
        );

        let items = ordered
            .get(window)
            .unwrap_or_default()
            .iter()
            .map(|resource| render(*resource, &query))
            .collect();

        Ok(envelope(query, items, total))
    }

    /// Evaluates `query` on a page already sorted, reversed and offset by the
    /// data layer.
    ///
    /// At most `limit` resources are taken from the window. The sort
    /// attribute is only checked against the window schema: the values of
    /// the resources are not inspected, so the null ordering policy is the
    /// data layer's responsibility.
    ///
    /// # Errors
    ///
    /// Will return an `InvalidParameter` error if the `sort` attribute is not
    /// in the window schema or if the `limit` is above the maximum allowed by
    /// the policy.
    pub fn evaluate_window<R, I>(&self, window: Window<I>, query: &Query) -> Result<Envelope<R>, Error>
    where
        R: Resource,
        I: IntoIterator<Item = R>,
    {
        let query = self.effective_query(window.schema(), query)?;

        let total = window.total();
        let page_size = query.pagination().window(total).len();

        debug!("evaluating {query:?} on a window of a collection of {total} resources, taking up to {page_size}");

        let items = window
            .into_resources()
            .into_iter()
            .take(page_size)
            .map(|resource| render(resource, &query))
            .collect();

        Ok(envelope(query, items, total))
    }

    /// The query with the canonical sort attribute and the policy defaults
    /// applied.
    fn effective_query(&self, schema: &Schema, query: &Query) -> Result<Query, Error> {
        let sort = match &query.sort {
            Some(attribute) => match schema.resolve(attribute) {
                Some(canonical) => Some(canonical.to_owned()),
                None => {
                    return Err(Error::invalid_parameter(
                        "sort",
                        Reason::UnknownAttribute {
                            attribute: attribute.clone(),
                        },
                    ))
                }
            },
            None => None,
        };

        let limit = query.limit.or(self.policy.default_limit);

        if let (Some(limit), Some(max_limit)) = (limit, self.policy.max_limit) {
            if limit > max_limit {
                return Err(Error::invalid_parameter("limit", Reason::LimitAboveMaximum { limit, max_limit }));
            }
        }

        Ok(Query {
            sort,
            reverse: query.reverse,
            limit,
            offset: query.offset,
            details: Some(query.details.unwrap_or(self.policy.default_details)),
        })
    }
}

/// Evaluates `query` on a materialized collection with the default policy.
///
/// # Errors
///
/// See [`Evaluator::evaluate`].
pub fn evaluate<'a, R: Resource>(collection: &Collection<'a, R>, query: &Query) -> Result<Envelope<&'a R>, Error> {
    Evaluator::default().evaluate(collection, query)
}

fn render<T: Resource>(resource: T, query: &Query) -> Item<T> {
    match query.details.unwrap_or_default() {
        Details::Minimal => Item::Reference(resource.key()),
        Details::All => Item::Full(resource),
    }
}

fn envelope<T>(query: Query, items: Vec<Item<T>>, total: usize) -> Envelope<T> {
    let pagination = query.pagination();

    let link_to = |offset: usize| {
        Link::new(Query {
            offset,
            ..query.clone()
        })
    };

    let previous = pagination.previous().map(|page| link_to(page.offset));
    let next = pagination.next(items.len(), total).map(|page| link_to(page.offset));

    Envelope {
        items,
        sort: query.sort,
        reverse: query.reverse,
        limit: query.limit,
        offset: query.offset,
        previous,
        next,
        total,
        details: query.details.unwrap_or_default(),
    }
}

//! Stable ordering of resources by one attribute.
use std::cmp::Ordering;

use torrust_hyper_collection_primitives::NullOrdering;

use super::error::{Error, Reason};
use super::resource::{AttributeValue, Resource};

/// Sorts `resources` by `attribute` in ascending order.
///
/// The sort is stable: resources with equal values keep their relative
/// order. Resources without a value are placed according to `null_ordering`.
///
/// # Errors
///
/// Will return an `InvalidParameter` error for the `sort` parameter if a
/// resource has no value for `attribute` and the policy is
/// [`NullOrdering::Reject`].
pub fn sort_by_attribute<R: Resource>(resources: &mut [&R], attribute: &str, null_ordering: NullOrdering) -> Result<(), Error> {
    let mut keyed: Vec<(Option<AttributeValue>, &R)> = resources
        .iter()
        .map(|resource| (resource.attribute(attribute), *resource))
        .collect();

    if null_ordering == NullOrdering::Reject {
        if let Some((_, resource)) = keyed.iter().find(|(value, _)| value.is_none()) {
            return Err(Error::invalid_parameter(
                "sort",
                Reason::MissingAttribute {
                    attribute: attribute.to_owned(),
                    key: resource.key(),
                },
            ));
        }
    }

    keyed.sort_by(|(a, _), (b, _)| compare(a.as_ref(), b.as_ref(), null_ordering));

    for (slot, (_, resource)) in resources.iter_mut().zip(keyed) {
        *slot = resource;
    }

    Ok(())
}

fn compare(a: Option<&AttributeValue>, b: Option<&AttributeValue>, null_ordering: NullOrdering) -> Ordering {
    let missing_first = null_ordering == NullOrdering::First;

    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => {
            if missing_first {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
        (Some(_), None) => {
            if missing_first {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
    }
}

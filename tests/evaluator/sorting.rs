use torrust_hyper_collection::core::error::Reason;
use torrust_hyper_collection::core::evaluator::{evaluate, Evaluator};
use torrust_hyper_collection::core::query::Query;
use torrust_hyper_collection_primitives::NullOrdering;
use torrust_hyper_collection_test_helpers::configuration;

use crate::common::fixtures::{collection, references, users, User};

fn ids(envelope_references: &[String]) -> Vec<u32> {
    envelope_references
        .iter()
        .filter_map(|reference| reference.strip_prefix("/users/"))
        .filter_map(|id| id.parse().ok())
        .collect()
}

#[test]
fn equal_values_should_keep_the_original_order() {
    let users = users(30);

    let envelope = evaluate(&collection(&users), &Query::default().sorted_by("score")).unwrap();

    let sorted = ids(&references(&envelope));
    let with_score = |score: i64| -> Vec<u32> {
        sorted
            .iter()
            .copied()
            .filter(|id| users.iter().any(|user| user.id == *id && user.score == Some(score)))
            .collect()
    };

    for score in 0..7 {
        let group = with_score(score);
        let mut ascending = group.clone();
        ascending.sort_unstable();
        assert_eq!(group, ascending);
    }
}

#[test]
fn the_same_request_should_always_return_the_same_page() {
    let users = users(90);
    let query = Query::default().sorted_by("score").reversed().limited_to(15).starting_at(30);

    let first = evaluate(&collection(&users), &query).unwrap();
    let second = evaluate(&collection(&users), &query).unwrap();

    assert_eq!(first, second);
}

#[test]
fn reversing_should_invert_the_sorted_order() {
    let users = users(40);

    let ascending = evaluate(&collection(&users), &Query::default().sorted_by("score")).unwrap();
    let descending = evaluate(&collection(&users), &Query::default().sorted_by("score").reversed()).unwrap();

    let mut inverted = references(&ascending);
    inverted.reverse();

    assert_eq!(references(&descending), inverted);
}

#[test]
fn a_reversed_page_should_mirror_the_page_at_the_other_end() {
    let users = users(40);

    let first = evaluate(&collection(&users), &Query::default().sorted_by("name").limited_to(8)).unwrap();
    let last_reversed = evaluate(
        &collection(&users),
        &Query::default().sorted_by("name").reversed().limited_to(8).starting_at(32),
    )
    .unwrap();

    let mut mirrored = references(&last_reversed);
    mirrored.reverse();

    assert_eq!(mirrored, references(&first));
}

#[test]
fn resources_without_a_value_should_go_last_by_default() {
    let users = users(12);

    let envelope = evaluate(&collection(&users), &Query::default().sorted_by("score")).unwrap();

    assert_eq!(ids(&references(&envelope))[10..], [5, 10]);
}

#[test]
fn resources_without_a_value_should_go_first_when_the_policy_says_so() {
    let users = users(12);
    let evaluator = Evaluator::from_configuration(&configuration::ephemeral_with_null_ordering(NullOrdering::First));

    let envelope = evaluator
        .evaluate(&collection(&users), &Query::default().sorted_by("score"))
        .unwrap();

    assert_eq!(ids(&references(&envelope))[..2], [5, 10]);
}

#[test]
fn resources_without_a_value_should_be_rejected_when_the_policy_says_so() {
    let users = users(12);
    let evaluator = Evaluator::from_configuration(&configuration::ephemeral_with_null_ordering(NullOrdering::Reject));

    let err = evaluator
        .evaluate(&collection(&users), &Query::default().sorted_by("score"))
        .unwrap_err();

    assert_eq!(
        err.reason(),
        &Reason::MissingAttribute {
            attribute: "score".to_string(),
            key: "/users/5".to_string()
        }
    );
}

#[test]
fn a_collection_where_every_resource_has_a_value_should_be_sorted_under_the_reject_policy() {
    let users: Vec<User> = users(12).into_iter().filter(|user| user.score.is_some()).collect();
    let evaluator = Evaluator::from_configuration(&configuration::ephemeral_with_null_ordering(NullOrdering::Reject));

    let envelope = evaluator
        .evaluate(&collection(&users), &Query::default().sorted_by("score"))
        .unwrap();

    assert_eq!(envelope.total, 10);
}

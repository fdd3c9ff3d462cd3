//! Requests decoded from query strings, as a delivery layer would do it.
use torrust_hyper_collection::core::envelope::{Envelope, Item};
use torrust_hyper_collection::core::error::Error;
use torrust_hyper_collection::core::evaluator::Evaluator;
use torrust_hyper_collection::core::query::Query;
use torrust_hyper_collection_configuration::Configuration;
use torrust_hyper_collection_primitives::Details;
use torrust_hyper_collection_test_helpers::configuration;

use crate::common::fixtures::{collection, references, users, User};

fn get<'a>(users: &'a [User], query_string: &str, configuration: &Configuration) -> Result<Envelope<&'a User>, Error> {
    let query = Query::from_query_string(query_string)?;

    Evaluator::from_configuration(configuration).evaluate(&collection(users), &query)
}

#[test]
fn parameter_names_and_values_should_be_matched_ignoring_the_case() {
    let users = users(30);

    let lowercase = get(
        &users,
        "?sort=name&reverse=true&limit=5&offset=5&details=all",
        &configuration::ephemeral(),
    )
    .unwrap();
    let mixed_case = get(
        &users,
        "?SORT=Name&Reverse=TRUE&LIMIT=5&Offset=5&DETAILS=All",
        &configuration::ephemeral(),
    )
    .unwrap();

    assert_eq!(mixed_case, lowercase);
    assert_eq!(mixed_case.sort, Some("name".to_string()));
}

#[test]
fn the_links_should_carry_every_parameter_of_the_request() {
    let users = users(30);

    let envelope = get(&users, "sort=score&reverse=1&limit=5&offset=10", &configuration::ephemeral()).unwrap();

    assert_eq!(
        envelope.previous.unwrap().to_string(),
        "?sort=score&reverse=true&limit=5&offset=5&details=minimal"
    );
    assert_eq!(
        envelope.next.unwrap().to_string(),
        "?sort=score&reverse=true&limit=5&offset=15&details=minimal"
    );
}

#[test]
fn a_link_should_be_a_valid_request_for_the_linked_page() {
    let users = users(30);

    let first = get(&users, "sort=name&limit=10", &configuration::ephemeral()).unwrap();
    let next_link = first.next.unwrap().to_string();

    let second = get(&users, &next_link, &configuration::ephemeral()).unwrap();

    assert_eq!(second.offset, 10);
    assert_eq!(second.items.len(), 10);
}

#[test]
fn full_resources_should_be_returned_when_all_details_are_requested() {
    let users = users(3);

    let envelope = get(&users, "details=all", &configuration::ephemeral()).unwrap();

    assert_eq!(envelope.details, Details::All);
    assert!(envelope.items.iter().all(|item| matches!(item, Item::Full(_))));
}

#[test]
fn references_should_be_returned_by_default() {
    let users = users(3);

    let envelope = get(&users, "", &configuration::ephemeral()).unwrap();

    assert_eq!(references(&envelope), vec!["/users/1", "/users/2", "/users/3"]);
}

#[test]
fn the_envelope_should_be_serialized_with_every_key() {
    let users = users(3);

    let envelope = get(&users, "limit=2", &configuration::ephemeral()).unwrap();

    let value = serde_json::to_value(&envelope).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();

    assert_eq!(
        keys,
        vec!["items", "sort", "reverse", "limit", "offset", "previous", "next", "total", "details"]
    );
    assert!(value["sort"].is_null());
    assert!(value["previous"].is_null());
}

#[test]
fn a_bounded_policy_should_page_requests_without_a_limit() {
    let users = users(30);

    let envelope = get(&users, "", &configuration::ephemeral_bounded(10, 20)).unwrap();

    assert_eq!(envelope.limit, Some(10));
    assert_eq!(envelope.items.len(), 10);
}

mod invalid_requests {
    use rstest::rstest;
    use torrust_hyper_collection::core::error::Error;
    use torrust_hyper_collection_test_helpers::configuration;

    use super::get;
    use crate::common::fixtures::users;

    #[rstest]
    #[case::unknown_sort_attribute("sort=email", "sort")]
    #[case::negative_limit("limit=-1", "limit")]
    #[case::negative_offset("offset=-10", "offset")]
    #[case::malformed_limit("limit=ten", "limit")]
    #[case::unknown_details("details=some", "details")]
    #[case::unknown_parameter("page=2", "page")]
    #[case::repeated_parameter("offset=1&Offset=2", "offset")]
    #[case::limit_above_the_maximum("limit=21", "limit")]
    fn should_be_rejected_naming_the_parameter(#[case] query_string: &str, #[case] parameter: &str) {
        let users = users(5);

        let result = get(&users, query_string, &configuration::ephemeral_bounded(10, 20));

        assert!(matches!(result, Err(Error::InvalidParameter { name, .. }) if name == parameter));
    }
}

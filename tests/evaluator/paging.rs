use rstest::rstest;
use torrust_hyper_collection::core::evaluator::evaluate;
use torrust_hyper_collection::core::query::Query;

use crate::common::fixtures::{collection, references, users};

#[test]
fn it_should_return_a_middle_page_of_200_users_sorted_by_name_in_reverse() {
    let users = users(200);

    let envelope = evaluate(
        &collection(&users),
        &Query::default().sorted_by("name").reversed().limited_to(10).starting_at(50),
    )
    .unwrap();

    assert_eq!(envelope.items.len(), 10);
    assert_eq!(envelope.total, 200);
    assert!(envelope.previous.is_some());
    assert!(envelope.next.is_some());
}

#[test]
fn it_should_return_the_last_page_of_50_users_without_a_next_link() {
    let users = users(50);

    let envelope = evaluate(&collection(&users), &Query::default().limited_to(25).starting_at(25)).unwrap();

    assert_eq!(envelope.items.len(), 25);
    assert!(envelope.next.is_none());
    assert!(envelope.previous.is_some());
}

#[rstest]
#[case::no_paging(Query::default())]
#[case::first_page(Query::default().limited_to(10))]
#[case::middle_page(Query::default().sorted_by("name").limited_to(10).starting_at(30))]
#[case::short_last_page(Query::default().limited_to(10).starting_at(70))]
#[case::past_the_end(Query::default().limited_to(10).starting_at(500))]
#[case::metadata_only(Query::default().limited_to(0))]
fn the_total_should_be_the_size_of_the_collection_for_any_page(#[case] query: Query) {
    let users = users(73);

    assert_eq!(evaluate(&collection(&users), &query).unwrap().total, 73);
}

#[rstest]
#[case::by_id(Query::default().sorted_by("id"), 7)]
#[case::by_name_in_reverse(Query::default().sorted_by("name").reversed(), 10)]
#[case::by_score_with_ties_and_missing_values(Query::default().sorted_by("score"), 4)]
#[case::in_the_original_order(Query::default(), 1)]
#[case::in_a_single_page(Query::default().sorted_by("name"), 100)]
fn following_the_next_links_should_return_the_whole_sorted_collection_exactly_once(
    #[case] query: Query,
    #[case] limit: usize,
) {
    let users = users(61);
    let collection = collection(&users);

    let complete = references(&evaluate(&collection, &query).unwrap());

    let mut paged = Vec::new();
    let mut next = Some(query.limited_to(limit));

    while let Some(page) = next {
        let envelope = evaluate(&collection, &page).unwrap();
        paged.extend(references(&envelope));
        next = envelope.next.map(|link| link.query().clone());
    }

    assert_eq!(paged, complete);
}

#[test]
fn following_the_previous_links_should_reach_the_first_page() {
    let users = users(45);
    let collection = collection(&users);

    let mut offsets = Vec::new();
    let mut previous = Some(Query::default().limited_to(10).starting_at(40));

    while let Some(page) = previous {
        offsets.push(page.offset);
        previous = evaluate(&collection, &page).unwrap().previous.map(|link| link.query().clone());
    }

    assert_eq!(offsets, vec![40, 30, 20, 10, 0]);
}

#[test]
fn a_zero_limit_should_return_no_items_and_the_total() {
    let users = users(20);

    let envelope = evaluate(&collection(&users), &Query::default().limited_to(0).starting_at(5)).unwrap();

    assert!(envelope.items.is_empty());
    assert_eq!(envelope.total, 20);
}

#[rstest]
#[case::at_the_end(20, 20, true)]
#[case::past_the_end(20, 35, true)]
#[case::of_an_empty_collection(0, 0, false)]
fn an_offset_at_or_past_the_end_should_return_an_empty_page(
    #[case] count: u32,
    #[case] offset: usize,
    #[case] has_previous: bool,
) {
    let users = users(count);

    let envelope = evaluate(&collection(&users), &Query::default().limited_to(10).starting_at(offset)).unwrap();

    assert!(envelope.items.is_empty());
    assert!(envelope.next.is_none());
    assert_eq!(envelope.previous.is_some(), has_previous);
}

#[test]
fn an_empty_collection_should_return_an_empty_page_without_links() {
    let users = users(0);

    let envelope = evaluate(&collection(&users), &Query::default()).unwrap();

    assert!(envelope.items.is_empty());
    assert_eq!(envelope.total, 0);
    assert!(envelope.previous.is_none());
    assert!(envelope.next.is_none());
}

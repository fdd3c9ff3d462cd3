//! The console application running on the demo records.
use clap::Parser;
use serde_json::{json, Value};
use torrust_hyper_collection::console::app::{run_with, Args};
use torrust_hyper_collection::console::logger::Logger;
use torrust_hyper_collection_test_helpers::configuration;

fn demo_records() -> String {
    format!("{}/demos/users.json", env!("CARGO_MANIFEST_DIR"))
}

fn run(records: &str, arguments: &[&str]) -> anyhow::Result<Value> {
    let args = Args::try_parse_from(
        ["torrust-hyper-collection", records]
            .into_iter()
            .chain(arguments.iter().copied()),
    )
    .unwrap();

    let logger = Logger::new();

    run_with(&args, &configuration::ephemeral(), &logger)?;

    Ok(serde_json::from_str(&logger.log()).unwrap())
}

#[test]
fn it_should_print_the_envelope_of_the_requested_page() {
    let envelope = run(&demo_records(), &["--query", "sort=name&reverse=true&limit=2"]).unwrap();

    assert_eq!(
        envelope,
        json!({
            "items": ["3", "2"],
            "sort": "name",
            "reverse": true,
            "limit": 2,
            "offset": 0,
            "previous": null,
            "next": "?sort=name&reverse=true&limit=2&offset=2&details=minimal",
            "total": 5,
            "details": "minimal"
        })
    );
}

#[test]
fn it_should_sort_records_missing_the_attribute_last() {
    let envelope = run(&demo_records(), &["--query", "sort=age"]).unwrap();

    assert_eq!(envelope["items"], json!(["3", "1", "5", "2", "4"]));
}

#[test]
fn it_should_treat_null_values_as_missing() {
    let envelope = run(&demo_records(), &["--query", "sort=email"]).unwrap();

    assert_eq!(envelope["items"], json!(["1", "4", "5", "3", "2"]));
}

#[test]
fn it_should_print_pretty_json() {
    let envelope = run(&demo_records(), &["--query", "limit=0", "--pretty"]).unwrap();

    assert_eq!(envelope["total"], json!(5));
    assert_eq!(envelope["items"], json!([]));
}

#[test]
fn it_should_fail_when_the_records_file_does_not_exist() {
    let result = run("/nonexistent/users.json", &[]);

    assert!(result.is_err());
}

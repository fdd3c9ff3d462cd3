//! Evaluates a collection request on a JSON file.
//!
//! Examples:
//!
//! First page of the users sorted by name:
//!
//! ```text
//! cargo run -- demos/users.json --query "sort=name&limit=2" | jq
//! ```
//!
//! Whole resources and absolute links:
//!
//! ```text
//! cargo run -- demos/users.json --query "details=all&limit=2&offset=2" --base-url https://api.example.com/users --pretty
//! ```
//!
//! The records file must contain a JSON array of objects, each of them with
//! the key attribute (`id` unless `--key` says otherwise).
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use torrust_hyper_collection_configuration::Configuration;
use tracing::info;
use url::Url;

use super::printer::{Console, Printer};
use crate::bootstrap;
use crate::core::collection::Collection;
use crate::core::evaluator::Evaluator;
use crate::core::query::Query;
use crate::core::record::Record;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path of the JSON file with the records of the collection.
    records: PathBuf,

    /// Query string with the `sort`, `reverse`, `limit`, `offset` and `details` parameters.
    #[arg(short, long, default_value = "")]
    query: String,

    /// Attribute used as the stable reference of each record.
    #[arg(short, long, default_value = "id")]
    key: String,

    /// URL of the collection, used to build absolute `previous` and `next` links.
    #[arg(long)]
    base_url: Option<Url>,

    /// Pretty-print the envelope.
    #[arg(long)]
    pretty: bool,
}

/// # Errors
///
/// Will return an error if the configuration can not be loaded or the
/// request can not be evaluated.
pub fn run() -> anyhow::Result<()> {
    let configuration = bootstrap::config::initialize_configuration().context("failed to load the configuration")?;

    bootstrap::logging::setup(&configuration);

    let args = Args::parse();

    run_with(&args, &configuration, &Console::new())
}

/// Evaluates the request described by `args` and prints the envelope.
///
/// # Errors
///
/// Will return an error if the records file can not be read or is not valid,
/// or if the request can not be evaluated.
pub fn run_with(args: &Args, configuration: &Configuration, printer: &dyn Printer) -> anyhow::Result<()> {
    let json = read_records_file(&args.records)?;

    let envelope = evaluate_json(&json, args, configuration)?;

    printer.println(&envelope);

    Ok(())
}

fn read_records_file(path: &Path) -> anyhow::Result<String> {
    info!("Reading records from: {}", path.display());

    std::fs::read_to_string(path).with_context(|| format!("failed to read the records file `{}`", path.display()))
}

/// Evaluates the request on a JSON array of records and returns the envelope
/// serialized as JSON.
fn evaluate_json(json: &str, args: &Args, configuration: &Configuration) -> anyhow::Result<String> {
    let values: Vec<Value> = serde_json::from_str(json).context("the records must be a JSON array")?;

    let records = Record::from_values(values, &args.key).context("failed to build the collection")?;

    let collection = Collection::new(&records, Record::schema(&records));

    let query = Query::from_query_string(&args.query).context("invalid query string")?;

    let mut envelope = Evaluator::from_configuration(configuration)
        .evaluate(&collection, &query)
        .context("failed to evaluate the request")?;

    if let Some(base_url) = &args.base_url {
        envelope = envelope.with_base(base_url);
    }

    info!(
        "Returning {} of {} records from offset {}",
        envelope.items.len(),
        envelope.total,
        envelope.offset
    );

    let output = if args.pretty {
        serde_json::to_string_pretty(&envelope)
    } else {
        serde_json::to_string(&envelope)
    };

    output.context("failed to serialize the envelope into JSON")
}

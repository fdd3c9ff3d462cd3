//! Program to evaluate collection requests on JSON files.
use torrust_hyper_collection::console::app;

fn main() -> anyhow::Result<()> {
    app::run()
}

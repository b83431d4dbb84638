//! Search command handler.

use anyhow::{Context, Result};

use crate::cli::SearchArgs;
use crate::cli::output::{Output, OutputFormat, QueryDetail};
use crate::store::SqliteStore;

pub fn handle_search(args: &SearchArgs, store: &SqliteStore) -> Result<()> {
    let results = store
        .search(&args.term)
        .with_context(|| format!("search failed for term: {}", args.term))?;

    match args.format {
        OutputFormat::Human => {
            // No matches prints nothing; an empty result is not an error.
            for query in &results {
                println!("--- NAME: {} ---\n{}\n", query.name, query.body);
            }
        }
        OutputFormat::Json => {
            let listings: Vec<QueryDetail> = results.iter().map(QueryDetail::from).collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

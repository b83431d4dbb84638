//! List command handler.

use anyhow::{Context, Result};

use crate::cli::ListArgs;
use crate::cli::output::{Output, OutputFormat, QueryListing};
use crate::store::SqliteStore;

pub fn handle_list(args: &ListArgs, store: &SqliteStore) -> Result<()> {
    let queries = store.list().context("failed to list queries")?;

    match args.format {
        OutputFormat::Human => {
            // Header prints even when the store is empty.
            println!("Saved Queries:");
            for query in &queries {
                println!("  - {}", query.name);
            }
        }
        OutputFormat::Json => {
            let listings: Vec<QueryListing> = queries.iter().map(QueryListing::from).collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

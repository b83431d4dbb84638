//! Delete command handler.

use anyhow::{Context, Result};

use crate::cli::DeleteArgs;
use crate::store::SqliteStore;

pub fn handle_delete(args: &DeleteArgs, store: &mut SqliteStore) -> Result<()> {
    // Deleting a name that never existed still reports success.
    store
        .delete(&args.name)
        .with_context(|| format!("could not delete query '{}'", args.name))?;

    println!("Query deleted successfully!");
    Ok(())
}

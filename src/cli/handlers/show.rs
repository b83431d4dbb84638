//! Show command handler.

use anyhow::Result;

use super::ClipboardSink;
use crate::cli::ShowArgs;
use crate::cli::output::{Output, OutputFormat, QueryDetail};
use crate::infra::copy_to_clipboard;
use crate::store::SqliteStore;

/// Internal implementation that accepts a generic clipboard sink.
pub(crate) fn handle_show_impl<C: ClipboardSink>(
    args: &ShowArgs,
    store: &SqliteStore,
    clipboard: &C,
) -> Result<()> {
    let query = store.get(&args.name)?;

    match args.format {
        OutputFormat::Human => {
            println!("--- NAME: {} ---\n{}\n", query.name, query.body);

            // The content was already displayed, so a missing clipboard
            // provider is only worth a warning.
            match clipboard.copy(&query.body) {
                Ok(()) => println!("Query copied to clipboard!"),
                Err(err) => eprintln!("warning: failed to copy to clipboard: {err:#}"),
            }
        }
        OutputFormat::Json => {
            let output = Output::new(QueryDetail::from(&query));
            println!("{}", serde_json::to_string_pretty(&output)?);

            if let Err(err) = clipboard.copy(&query.body) {
                eprintln!("warning: failed to copy to clipboard: {err:#}");
            }
        }
    }

    Ok(())
}

pub fn handle_show(args: &ShowArgs, store: &SqliteStore) -> Result<()> {
    struct RealClipboard;
    impl ClipboardSink for RealClipboard {
        fn copy(&self, text: &str) -> Result<()> {
            copy_to_clipboard(text)
        }
    }
    handle_show_impl(args, store, &RealClipboard)
}

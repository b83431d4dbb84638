//! Add and Edit command handlers.
//!
//! Both collect the query body through an interactive editor session; an
//! empty result is a benign no-op in either case, so the store is never
//! left with an empty body.

use anyhow::{Context, Result};

use super::EditorSession;
use crate::cli::config::Config;
use crate::cli::{AddArgs, EditArgs};
use crate::infra::edit_in_editor;
use crate::store::SqliteStore;

/// Internal implementation that accepts a generic editor session.
pub(crate) fn handle_add_impl<E: EditorSession>(
    args: &AddArgs,
    store: &mut SqliteStore,
    editor: &E,
) -> Result<()> {
    let body = editor.edit("").context("could not edit query")?;

    if body.is_empty() {
        println!("Editor was empty, please type a query to save it");
        return Ok(());
    }

    store
        .insert(&args.name, &body)
        .with_context(|| format!("could not save query '{}'", args.name))?;

    println!("Query saved successfully!");
    Ok(())
}

/// Internal implementation that accepts a generic editor session.
pub(crate) fn handle_edit_impl<E: EditorSession>(
    args: &EditArgs,
    store: &mut SqliteStore,
    editor: &E,
) -> Result<()> {
    // Look up first so editing a missing name fails before the editor opens.
    let query = store.get(&args.name)?;

    let body = editor.edit(&query.body).context("could not edit query")?;

    if body.is_empty() {
        println!("Query body was empty, if you want to delete a query use the delete command");
        return Ok(());
    }

    store
        .update_body(&args.name, &body)
        .with_context(|| format!("could not update query '{}'", args.name))?;

    println!("Query updated successfully!");
    Ok(())
}

/// Editor session backed by the user's configured editor.
struct RealEditor<'a>(&'a Config);

impl EditorSession for RealEditor<'_> {
    fn edit(&self, initial: &str) -> Result<String> {
        edit_in_editor(&self.0.editor(), initial)
    }
}

pub fn handle_add(args: &AddArgs, store: &mut SqliteStore, config: &Config) -> Result<()> {
    handle_add_impl(args, store, &RealEditor(config))
}

pub fn handle_edit(args: &EditArgs, store: &mut SqliteStore, config: &Config) -> Result<()> {
    handle_edit_impl(args, store, &RealEditor(config))
}

//! qsave - named query snippets saved to a local SQLite store

pub mod cli;
pub mod infra;
pub mod store;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_add, handle_delete, handle_edit, handle_list, handle_search, handle_show},
};
use store::SqliteStore;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // An unknown subcommand prints usage and exits cleanly, same as
        // no subcommand at all. Other usage errors (e.g. a missing
        // required argument) stay fatal with clap's own diagnostics.
        Err(err) if err.kind() == ErrorKind::InvalidSubcommand => return print_usage(),
        Err(err) => err.exit(),
    };

    let Some(command) = &cli.command else {
        return print_usage();
    };

    let config = Config::load()?;
    let open_store = || -> Result<SqliteStore> {
        let db_path = config.db_path(cli.db.as_ref())?;
        SqliteStore::open(&db_path)
            .with_context(|| format!("failed to open query store at {}", db_path.display()))
    };

    match command {
        Command::Add(args) => handle_add(args, &mut open_store()?, &config),
        Command::Edit(args) => handle_edit(args, &mut open_store()?, &config),
        Command::Show(args) => handle_show(args, &open_store()?),
        Command::Search(args) => handle_search(args, &open_store()?),
        Command::List(args) => handle_list(args, &open_store()?),
        Command::Delete(args) => handle_delete(args, &mut open_store()?),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "qsave", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Prints the top-level usage text; used for the clean-exit paths.
fn print_usage() -> Result<()> {
    Cli::command()
        .print_help()
        .context("failed to print usage")?;
    Ok(())
}

//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// qsave - named query snippets saved to a local SQLite store
#[derive(Parser, Debug)]
#[command(name = "qsave", version, about, long_about = None)]
pub struct Cli {
    /// Database file (overrides config file and the default ~/qsave.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Invoking with no subcommand prints usage and exits cleanly.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save a new query (opens your editor)
    Add(AddArgs),

    /// Edit a saved query in your editor
    Edit(EditArgs),

    /// Print a saved query and copy it to the clipboard
    Show(ShowArgs),

    /// Search query bodies for a substring
    Search(SearchArgs),

    /// List all saved query names
    List(ListArgs),

    /// Delete a saved query
    Delete(DeleteArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Name for the new query
    pub name: String,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Name of the query to edit
    pub name: String,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Name of the query to show
    pub name: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Substring to look for in query bodies
    pub term: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `list` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `delete` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Name of the query to delete
    pub name: String,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

//! Command handlers for the CLI.

mod add_edit;
mod delete;
mod list;
mod search;
mod show;


use anyhow::Result;

// Re-export public items
pub use add_edit::{handle_add, handle_edit};
pub use delete::handle_delete;
pub use list::handle_list;
pub use search::handle_search;
pub use show::handle_show;

// Re-export for tests
#[cfg(test)]
pub(crate) use add_edit::{handle_add_impl, handle_edit_impl};
#[cfg(test)]
pub(crate) use show::handle_show_impl;

/// Trait for collecting text from an interactive editor (allows mocking in tests).
pub(crate) trait EditorSession {
    fn edit(&self, initial: &str) -> Result<String>;
}

/// Trait for placing text on the system clipboard (allows mocking in tests).
pub(crate) trait ClipboardSink {
    fn copy(&self, text: &str) -> Result<()>;
}

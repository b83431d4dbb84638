//! External process and platform integrations.

pub mod clipboard;
pub mod editor;

pub use clipboard::copy_to_clipboard;
pub use editor::edit_in_editor;

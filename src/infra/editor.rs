//! Interactive editor bridge.
//!
//! Hands text to an external editor via a temporary file and returns the
//! edited result once the editor exits.

use anyhow::{Context, Result, bail};
use std::fs;
use std::io::Write;
use std::process::Command;

/// Opens `command` on a temporary file seeded with `initial` and returns
/// the file's contents after the editor exits.
///
/// The editor command is whitespace-split into program + args (may include
/// args like "code --wait"). `--wait`/`-w` flags are stripped since this
/// process already blocks on child exit. The child inherits stdin, stdout,
/// and stderr so interactive editors work. The temporary file is removed
/// on every exit path.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created, written, or
/// read back, or if the editor cannot be launched or exits with a
/// non-zero status.
pub fn edit_in_editor(command: &str, initial: &str) -> Result<String> {
    let parts: Vec<&str> = command.split_whitespace().collect();
    let Some((program, flags)) = parts.split_first() else {
        bail!("editor command is empty");
    };

    let flags = flags
        .iter()
        .copied()
        .filter(|flag| *flag != "--wait" && *flag != "-w");

    let mut file = tempfile::Builder::new()
        .prefix("qsave-")
        .suffix(".txt")
        .tempfile()
        .context("failed to create temporary file")?;

    if !initial.is_empty() {
        file.write_all(initial.as_bytes())
            .context("failed to seed temporary file")?;
        file.flush().context("failed to seed temporary file")?;
    }

    let status = Command::new(program)
        .args(flags)
        .arg(file.path())
        .status()
        .with_context(|| format!("failed to launch editor '{program}'"))?;

    if !status.success() {
        bail!("editor '{program}' exited with non-zero status");
    }

    // Read by path, not the open handle: editors commonly replace the
    // file rather than writing through the original inode.
    fs::read_to_string(file.path()).context("failed to read edited file")
}

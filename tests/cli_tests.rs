//! End-to-end CLI test suite.
//!
//! Each test runs the compiled binary against an isolated database in a
//! temp directory. Editor-driven commands are exercised on unix with a
//! shell script standing in for the interactive editor.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated test environment with a temporary database.
struct TestEnv {
    temp_dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    fn db_path(&self) -> PathBuf {
        self.temp_dir.path().join("qsave.db")
    }

    /// Creates a qsave Command configured for this test environment.
    ///
    /// Points the database at the temp dir and isolates the config dir so
    /// a developer's own `~/.config/qsave` can't leak into the test.
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("qsave").expect("Failed to find qsave binary");
        cmd.arg("--db")
            .arg(self.db_path())
            .env("XDG_CONFIG_HOME", self.temp_dir.path().join("config"))
            .env_remove("EDITOR");
        cmd
    }

    /// Writes an executable script that overwrites its file argument with
    /// `content`, for use as $EDITOR.
    #[cfg(unix)]
    fn editor_writing(&self, content: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.temp_dir.path().join("fake-editor.sh");
        std::fs::write(&path, format!("#!/bin/sh\nprintf '%s' '{content}' > \"$1\"\n"))
            .expect("Failed to write editor script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod editor script");
        path
    }

    /// Saves a query through the real add path using a scripted editor.
    #[cfg(unix)]
    fn add_query(&self, name: &str, body: &str) {
        let editor = self.editor_writing(body);
        self.cmd()
            .env("EDITOR", &editor)
            .args(["add", name])
            .assert()
            .success()
            .stdout(predicate::str::contains("Query saved successfully!"));
    }
}

// ===========================================
// usage tests
// ===========================================

#[test]
fn no_arguments_prints_usage_and_exits_cleanly() {
    let env = TestEnv::new();
    let mut cmd = Command::cargo_bin("qsave").unwrap();
    cmd.env("XDG_CONFIG_HOME", env.temp_dir.path().join("config"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn unknown_subcommand_prints_usage_and_exits_cleanly() {
    let env = TestEnv::new();

    env.cmd()
        .arg("bogus-subcommand")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn missing_required_argument_is_a_usage_error() {
    let env = TestEnv::new();

    env.cmd()
        .arg("add")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// ===========================================
// list command tests
// ===========================================

#[test]
fn list_on_empty_store_prints_header() {
    let env = TestEnv::new();

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::eq("Saved Queries:\n"));
}

#[cfg(unix)]
#[test]
fn list_prints_names_as_bullets_ordered_by_name() {
    let env = TestEnv::new();
    env.add_query("zeta", "z body");
    env.add_query("alpha", "a body");

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::eq("Saved Queries:\n  - alpha\n  - zeta\n"));
}

#[cfg(unix)]
#[test]
fn list_json_output_is_parseable() {
    let env = TestEnv::new();
    env.add_query("greet", "SELECT 1;");

    let output = env
        .cmd()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(parsed["data"][0]["name"], "greet");
}

// ===========================================
// add command tests
// ===========================================

#[cfg(unix)]
#[test]
fn add_then_show_prints_the_saved_body() {
    let env = TestEnv::new();
    env.add_query("greet", "SELECT 1;");

    env.cmd()
        .args(["show", "greet"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("--- NAME: greet ---\nSELECT 1;\n"));
}

#[cfg(unix)]
#[test]
fn add_with_empty_editor_creates_no_query() {
    let env = TestEnv::new();
    let editor = env.editor_writing("");

    env.cmd()
        .env("EDITOR", &editor)
        .args(["add", "greet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Editor was empty"));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::eq("Saved Queries:\n"));
}

#[cfg(unix)]
#[test]
fn add_duplicate_name_fails() {
    let env = TestEnv::new();
    env.add_query("greet", "first");

    let editor = env.editor_writing("second");
    env.cmd()
        .env("EDITOR", &editor)
        .args(["add", "greet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // First body untouched.
    env.cmd()
        .args(["show", "greet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("first"));
}

#[cfg(unix)]
#[test]
fn add_with_failing_editor_reports_error() {
    let env = TestEnv::new();

    env.cmd()
        .env("EDITOR", "/nonexistent/editor-binary")
        .args(["add", "greet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not edit query"));
}

// ===========================================
// edit command tests
// ===========================================

#[cfg(unix)]
#[test]
fn edit_replaces_the_body() {
    let env = TestEnv::new();
    env.add_query("greet", "old body");

    let editor = env.editor_writing("new body");
    env.cmd()
        .env("EDITOR", &editor)
        .args(["edit", "greet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Query updated successfully!"));

    env.cmd()
        .args(["show", "greet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new body"));
}

#[cfg(unix)]
#[test]
fn edit_with_empty_editor_leaves_body_unchanged() {
    let env = TestEnv::new();
    env.add_query("greet", "old body");

    let editor = env.editor_writing("");
    env.cmd()
        .env("EDITOR", &editor)
        .args(["edit", "greet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Query body was empty"));

    env.cmd()
        .args(["show", "greet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("old body"));
}

#[test]
fn edit_missing_name_fails() {
    let env = TestEnv::new();

    env.cmd()
        .args(["edit", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no query found with name missing"));
}

// ===========================================
// show command tests
// ===========================================

#[test]
fn show_missing_name_fails() {
    let env = TestEnv::new();

    env.cmd()
        .args(["show", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no query found with name missing"));
}

// ===========================================
// search command tests
// ===========================================

#[cfg(unix)]
#[test]
fn search_returns_exactly_the_matching_queries() {
    let env = TestEnv::new();
    env.add_query("a", "foo");
    env.add_query("b", "foobar");

    env.cmd()
        .args(["search", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- NAME: a ---"))
        .stdout(predicate::str::contains("--- NAME: b ---"));

    env.cmd()
        .args(["search", "bar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- NAME: b ---"))
        .stdout(predicate::str::contains("--- NAME: a ---").not());
}

#[test]
fn search_with_no_matches_prints_nothing() {
    let env = TestEnv::new();

    env.cmd()
        .args(["search", "nothing-here"])
        .assert()
        .success()
        .stdout(predicate::eq(""));
}

// ===========================================
// delete command tests
// ===========================================

#[cfg(unix)]
#[test]
fn delete_then_show_reports_not_found() {
    let env = TestEnv::new();
    env.add_query("greet", "body");

    env.cmd()
        .args(["delete", "greet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Query deleted successfully!"));

    env.cmd()
        .args(["show", "greet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no query found with name greet"));
}

#[test]
fn delete_missing_name_on_empty_store_reports_success() {
    let env = TestEnv::new();

    env.cmd()
        .args(["delete", "missing_name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Query deleted successfully!"));
}

// ===========================================
// completions command tests
// ===========================================

#[test]
fn completions_emits_a_bash_script() {
    let env = TestEnv::new();

    env.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("qsave"));
}

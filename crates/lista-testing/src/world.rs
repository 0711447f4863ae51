//! TestWorld pattern for declarative integration test setup.
//!
//! Each world owns an isolated temp data directory; commands run against it
//! via `--data-dir`, so tests never touch the developer's real collection.

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use lista_types::Item;

use crate::fixtures;

pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".lista");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self { temp_dir, data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the persisted blob file.
    pub fn blob_path(&self) -> PathBuf {
        self.data_dir.join("crud_items_data.json")
    }

    /// Seed the persisted collection directly, bypassing the CLI.
    pub fn seed_items(&self, items: &[Item]) -> Result<()> {
        fixtures::write_blob(&self.blob_path(), items)
    }

    /// Seed a raw (possibly malformed) blob.
    pub fn seed_raw(&self, blob: &str) -> Result<()> {
        std::fs::write(self.blob_path(), blob)?;
        Ok(())
    }

    /// Read the persisted collection back, bypassing the CLI.
    pub fn read_items(&self) -> Result<Vec<Item>> {
        fixtures::read_blob(&self.blob_path())
    }

    /// Write a config.toml into the data directory.
    pub fn write_config(&self, contents: &str) -> Result<()> {
        std::fs::write(self.data_dir.join("config.toml"), contents)?;
        Ok(())
    }

    /// Run the CLI with the world's data directory.
    pub fn run(&self, args: &[&str]) -> Result<CommandResult> {
        self.run_with_stdin(args, "")
    }

    /// Run the CLI feeding the given input on stdin (interactive mode).
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Result<CommandResult> {
        let mut cmd = Command::cargo_bin("lista").context("lista binary not built")?;
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd.args(args);
        cmd.current_dir(self.temp_dir.path());
        cmd.write_stdin(stdin);

        let output = cmd.output().context("Failed to execute lista")?;
        Ok(CommandResult { output })
    }
}

pub struct CommandResult {
    output: std::process::Output,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.stdout()).context("stdout is not valid JSON")
    }
}

//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `notelist` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
/// The ambient environment never leaks in: the config file is always set
/// explicitly and `NOTELIST_PASSWORD` is cleared unless given.
pub struct NotelistCommand {
    args: Vec<String>,
    config: Option<PathBuf>,
    password_env: Option<String>,
}

impl NotelistCommand {
    /// Creates a new command for the `notelist` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config: None,
            password_env: None,
        }
    }

    /// Sets the `--dir` option to specify the data directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points `NOTELIST_CONFIG` at a config file.
    pub fn config(mut self, path: &Path) -> Self {
        self.config = Some(path.to_path_buf());
        self
    }

    /// Sets `NOTELIST_PASSWORD` for this run.
    pub fn password_env(mut self, password: &str) -> Self {
        self.password_env = Some(password.to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("notelist").expect("Failed to find notelist binary");
        cmd.env_remove("RUST_LOG").env_remove("NOTELIST_PASSWORD");
        match &self.config {
            Some(path) => cmd.env("NOTELIST_CONFIG", path),
            None => cmd.env_remove("NOTELIST_CONFIG"),
        };
        if let Some(password) = &self.password_env {
            cmd.env("NOTELIST_PASSWORD", password);
        }
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for `login <username> --password <password>`.
    pub fn login(self, username: &str, password: &str) -> Self {
        self.args(["login", username, "--password", password])
    }

    /// Configures for the `logout` command.
    pub fn logout(self) -> Self {
        self.args(["logout"])
    }

    /// Configures for the `whoami` command.
    pub fn whoami(self) -> Self {
        self.args(["whoami"])
    }

    /// Configures for `folder new <name>`.
    pub fn folder_new(self, name: &str) -> Self {
        self.args(["folder", "new", name])
    }

    /// Configures for `folder ls`.
    pub fn folder_ls(self) -> Self {
        self.args(["folder", "ls"])
    }

    /// Configures for `note new <folder> <title> <description>`.
    pub fn note_new(self, folder: &str, title: &str, description: &str) -> Self {
        self.args(["note", "new", folder, title, description])
    }

    /// Configures for `note ls <folder>`.
    pub fn note_ls(self, folder: &str) -> Self {
        self.args(["note", "ls", folder])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for NotelistCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        NotelistCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_dir() {
        let temp = TempDir::new().unwrap();
        let cmd = NotelistCommand::new().dir(temp.path());
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], temp.path().to_string_lossy());
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = NotelistCommand::new().folder_ls().format_json();
        assert_eq!(cmd.get_args(), ["folder", "ls", "--format", "json"]);
    }
}

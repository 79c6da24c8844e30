//! Isolated test environment with temp directory.

use super::NotelistCommand;
use notelist::domain::Folder;
use notelist::repository::Repository;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Username of the account every environment is configured with.
pub const TEST_USER: &str = "alice";

/// Password of [`TEST_USER`].
pub const TEST_PASSWORD: &str = "secret";

// sha256("secret")
const TEST_PASSWORD_SHA256: &str =
    "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b";

/// Isolated test environment with a temporary data directory and config file.
///
/// Everything lives under one temp directory that is removed on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    data_dir: PathBuf,
    config_path: PathBuf,
}

impl TestEnv {
    /// Creates a new environment with one configured account and nobody
    /// logged in.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().join("data");
        let config_path = temp_dir.path().join("config.toml");
        let config = format!(
            "[[accounts]]\nusername = \"{}\"\npassword_sha256 = \"{}\"\n",
            TEST_USER, TEST_PASSWORD_SHA256
        );
        std::fs::write(&config_path, config).expect("Failed to write config");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            config_path,
        }
    }

    /// Creates an environment and logs the test user in.
    pub fn logged_in() -> Self {
        let env = Self::new();
        env.cmd()
            .login(TEST_USER, TEST_PASSWORD)
            .assert()
            .success();
        env
    }

    /// Returns the path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the path to the config file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the path where the database is stored.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("notelist.db")
    }

    /// Returns the path where a remembered session is stored.
    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join("session.toml")
    }

    /// Opens the database directly, bypassing the CLI.
    pub fn repository(&self) -> Repository {
        Repository::open(&self.db_path()).expect("Failed to open repository")
    }

    /// Creates a folder directly in the database.
    pub fn add_folder(&self, name: &str) -> Folder {
        self.repository()
            .create_folder(name)
            .expect("Failed to create folder")
    }

    /// Creates a NotelistCommand configured for this test environment.
    pub fn cmd(&self) -> NotelistCommand {
        NotelistCommand::new()
            .config(&self.config_path)
            .dir(&self.data_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            assert!(env.config_path().exists());
            env.config_path().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_writes_config() {
        let env = TestEnv::new();
        let config = std::fs::read_to_string(env.config_path()).unwrap();
        assert!(config.contains(TEST_USER));
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.data_dir().to_string_lossy());
    }

    #[test]
    fn test_env_add_folder_is_visible_to_repository() {
        let env = TestEnv::new();
        env.add_folder("Work");
        let folders = env.repository().list_folders(None).unwrap();
        assert_eq!(folders.len(), 1);
    }
}

//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::session::Account;

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV: &str = "NOTELIST_CONFIG";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default data directory
    pub data_dir: Option<PathBuf>,

    /// Accounts allowed to log in
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// `$NOTELIST_CONFIG` if set, else `~/.config/notelist/config.toml`.
    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_config_path)
    }

    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notelist")
            .join("config.toml")
    }

    /// Resolve the data directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `data_dir` setting
    /// 3. Platform data directory (`~/.local/share/notelist` on Linux)
    pub fn data_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(|| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("notelist")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_no_data_dir() {
        let config = Config::default();
        assert!(config.data_dir.is_none());
        assert!(config.accounts.is_empty());
    }

    #[test]
    fn data_dir_prefers_cli_arg() {
        let config = Config {
            data_dir: Some(PathBuf::from("/config/data")),
            accounts: Vec::new(),
        };
        let cli_dir = PathBuf::from("/cli/data");
        assert_eq!(config.data_dir(Some(&cli_dir)), PathBuf::from("/cli/data"));
    }

    #[test]
    fn data_dir_falls_back_to_config() {
        let config = Config {
            data_dir: Some(PathBuf::from("/config/data")),
            accounts: Vec::new(),
        };
        assert_eq!(config.data_dir(None), PathBuf::from("/config/data"));
    }

    #[test]
    fn data_dir_falls_back_to_platform_dir() {
        let config = Config::default();
        assert!(config.data_dir(None).ends_with("notelist"));
    }

    #[test]
    fn load_from_missing_file_is_default() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn load_from_parses_accounts() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
data_dir = "/srv/notelist"

[[accounts]]
username = "alice"
password_sha256 = "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/notelist")));
        assert_eq!(config.accounts.len(), 1);
        assert_eq!(config.accounts[0].username, "alice");
    }

    #[test]
    fn load_from_rejects_malformed_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "data_dir = [").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }

    #[test]
    fn default_config_path_is_in_config_dir() {
        assert!(Config::default_config_path().ends_with("notelist/config.toml"));
    }
}

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

pub const ENV_NOTES_ACCOUNT: &str = "COCOMMAND_SCRIPTS_NOTES_ACCOUNT";
pub const ENV_DEFAULT_FOLDER: &str = "COCOMMAND_SCRIPTS_DEFAULT_FOLDER";
pub const ENV_OSASCRIPT: &str = "COCOMMAND_SCRIPTS_OSASCRIPT";
pub const ENV_TIMEOUT_MS: &str = "COCOMMAND_SCRIPTS_TIMEOUT_MS";

pub const DEFAULT_NOTES_ACCOUNT: &str = "iCloud";
pub const DEFAULT_NOTES_FOLDER: &str = "Notes";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub notes: NotesConfig,
    pub executor: ExecutorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// Notes account every script targets.
    pub account: String,
    /// Folder used when the caller names none. It can never be deleted.
    pub default_folder: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            account: DEFAULT_NOTES_ACCOUNT.to_string(),
            default_folder: DEFAULT_NOTES_FOLDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    pub osascript_path: PathBuf,
    /// Extra arguments placed before `-e <script>`.
    pub osascript_args: Vec<String>,
    pub timeout_ms: u64,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            osascript_path: PathBuf::from("osascript"),
            osascript_args: Vec::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ExecutorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Config {
    /// Read a JSON config file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults overridden by the process environment (and `.env`, if any).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(account) = lookup(ENV_NOTES_ACCOUNT) {
            self.notes.account = account;
        }
        if let Some(folder) = lookup(ENV_DEFAULT_FOLDER) {
            self.notes.default_folder = folder;
        }
        if let Some(path) = lookup(ENV_OSASCRIPT) {
            self.executor.osascript_path = PathBuf::from(path);
        }
        if let Some(value) = lookup(ENV_TIMEOUT_MS) {
            let invalid = || ConfigError::InvalidEnv {
                key: ENV_TIMEOUT_MS.to_string(),
                value: value.clone(),
            };
            // Must be positive.
            self.executor.timeout_ms = match value.trim().parse::<u64>() {
                Ok(0) | Err(_) => return Err(invalid()),
                Ok(timeout_ms) => timeout_ms,
            };
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_notes_app() {
        let config = Config::default();
        assert_eq!(config.notes.account, "iCloud");
        assert_eq!(config.notes.default_folder, "Notes");
        assert_eq!(config.executor.osascript_path, PathBuf::from("osascript"));
        assert_eq!(config.executor.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn load_fills_missing_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("scripts.json");
        std::fs::write(&path, r#"{"notes": {"account": "On My Mac"}}"#).expect("write config");

        let config = Config::load(&path).expect("load");
        assert_eq!(config.notes.account, "On My Mac");
        assert_eq!(config.notes.default_folder, "Notes");
        assert_eq!(config.executor.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = Config::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("scripts.json");
        std::fs::write(&path, "{ not json").expect("write config");
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn env_overrides_apply() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_NOTES_ACCOUNT, "Exchange"),
            (ENV_DEFAULT_FOLDER, "Inbox"),
            (ENV_OSASCRIPT, "/usr/bin/osascript"),
            (ENV_TIMEOUT_MS, " 1500 "),
        ]);
        let mut config = Config::default();
        config
            .apply_env(|key| vars.get(key).map(|value| value.to_string()))
            .unwrap();

        assert_eq!(config.notes.account, "Exchange");
        assert_eq!(config.notes.default_folder, "Inbox");
        assert_eq!(config.executor.osascript_path, PathBuf::from("/usr/bin/osascript"));
        assert_eq!(config.executor.timeout_ms, 1500);
    }

    #[test]
    fn env_rejects_bad_timeout() {
        let mut config = Config::default();
        let result = config.apply_env(|key| (key == ENV_TIMEOUT_MS).then(|| "soon".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidEnv { .. })));
        assert_eq!(config.executor.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn env_rejects_zero_timeout() {
        let mut config = Config::default();
        let result = config.apply_env(|key| (key == ENV_TIMEOUT_MS).then(|| "0".to_string()));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnv { ref value, .. }) if value == "0"
        ));
        assert_eq!(config.executor.timeout_ms, DEFAULT_TIMEOUT_MS);
    }
}

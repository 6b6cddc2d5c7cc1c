use crate::book::DEFAULT_BIRTHDAY_WINDOW;
use crate::error::{PocketError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_CONTACTS_FILE: &str = "contacts.json";
pub const DEFAULT_NOTES_FILE: &str = "notes.json";

/// Configuration for pocketpal, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PocketConfig {
    /// File name of the contacts snapshot, relative to the data directory
    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,

    #[serde(default = "default_notes_file")]
    pub notes_file: String,

    /// Days `birthdays` looks ahead when called without an argument
    #[serde(default = "default_birthday_window")]
    pub birthday_window: i64,
}

fn default_contacts_file() -> String {
    DEFAULT_CONTACTS_FILE.to_string()
}

fn default_notes_file() -> String {
    DEFAULT_NOTES_FILE.to_string()
}

fn default_birthday_window() -> i64 {
    DEFAULT_BIRTHDAY_WINDOW
}

impl Default for PocketConfig {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
            notes_file: default_notes_file(),
            birthday_window: default_birthday_window(),
        }
    }
}

impl PocketConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PocketError::Io)?;
        let config: PocketConfig =
            serde_json::from_str(&content).map_err(PocketError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PocketError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PocketError::Serialization)?;
        fs::write(config_path, content).map_err(PocketError::Io)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.birthday_window < 0 {
            return Err(PocketError::Store(format!(
                "birthday_window must not be negative, got {}",
                self.birthday_window
            )));
        }
        if self.contacts_file.trim().is_empty() || self.notes_file.trim().is_empty() {
            return Err(PocketError::Store(
                "contacts_file and notes_file must be set".to_string(),
            ));
        }
        if self.contacts_file == self.notes_file {
            return Err(PocketError::Store(
                "contacts_file and notes_file must differ".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PocketConfig::default();
        assert_eq!(config.contacts_file, "contacts.json");
        assert_eq!(config.notes_file, "notes.json");
        assert_eq!(config.birthday_window, 7);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = PocketConfig::load(dir.path()).unwrap();
        assert_eq!(config, PocketConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("nested");

        let config = PocketConfig {
            birthday_window: 30,
            ..PocketConfig::default()
        };
        config.save(&home).unwrap();

        let loaded = PocketConfig::load(&home).unwrap();
        assert_eq!(loaded.birthday_window, 30);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"birthday_window": 3}"#).unwrap();
        let config = PocketConfig::load(dir.path()).unwrap();
        assert_eq!(config.birthday_window, 3);
        assert_eq!(config.notes_file, DEFAULT_NOTES_FILE);
    }

    #[test]
    fn test_rejects_negative_window() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"birthday_window": -1}"#).unwrap();
        assert!(matches!(
            PocketConfig::load(dir.path()),
            Err(PocketError::Store(_))
        ));
    }

    #[test]
    fn test_rejects_shared_snapshot_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"contacts_file": "data.json", "notes_file": "data.json"}"#,
        )
        .unwrap();
        assert!(PocketConfig::load(dir.path()).is_err());
    }
}

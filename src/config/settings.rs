//! Bot settings loading from config.toml.
//!
//! Every field is defaulted, so the bot runs with no configuration file at
//! all: stores land next to the binary and the exchange rate falls back to
//! the long-standing community value.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default location of the settings file.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

fn default_ledger_file() -> PathBuf {
    PathBuf::from("user_data.json")
}

fn default_bingo_file() -> PathBuf {
    PathBuf::from("bingo_data.json")
}

const fn default_exchange_rate() -> f64 {
    78.0
}

/// Configuration structure representing the entire config.toml file.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Path of the ledger document (balances + recovery phrases).
    #[serde(default = "default_ledger_file")]
    pub ledger_file: PathBuf,
    /// Path of the ticket document (card price + assignments).
    #[serde(default = "default_bingo_file")]
    pub bingo_file: PathBuf,
    /// Bs. per USD, used only to render the secondary balance display.
    /// Read once at startup.
    #[serde(default = "default_exchange_rate")]
    pub exchange_rate: f64,
    /// Discord user ids allowed to run admin commands. Supplemented by the
    /// `ADMIN_ID` environment variable, see [`crate::config::admins`].
    #[serde(default)]
    pub admins: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ledger_file: default_ledger_file(),
            bingo_file: default_bingo_file(),
            exchange_rate: default_exchange_rate(),
            admins: Vec::new(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the TOML is invalid.
    /// Missing fields are not errors; they take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
            message: format!("Failed to read config file: {e}"),
        })?;

        toml::from_str(&contents).map_err(|e| Error::Config {
            message: format!("Failed to parse config.toml: {e}"),
        })
    }

    /// Loads settings from the default location, falling back to defaults if
    /// the file is absent or unparsable.
    #[must_use]
    pub fn load_or_default() -> Self {
        match Self::load(DEFAULT_CONFIG_PATH) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Using default settings: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_full_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            ledger_file = "/data/user_data.json"
            bingo_file = "/data/bingo_data.json"
            exchange_rate = 120.5
            admins = ["865597179145486366", "123"]
            "#,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.ledger_file, PathBuf::from("/data/user_data.json"));
        assert_eq!(settings.bingo_file, PathBuf::from("/data/bingo_data.json"));
        assert_eq!(settings.exchange_rate, 120.5);
        assert_eq!(settings.admins, vec!["865597179145486366", "123"]);
    }

    #[test]
    fn test_partial_settings_heal_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, r#"exchange_rate = 90.0"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.exchange_rate, 90.0);
        assert_eq!(settings.ledger_file, PathBuf::from("user_data.json"));
        assert_eq!(settings.bingo_file, PathBuf::from("bingo_data.json"));
        assert!(settings.admins.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Settings::load("/definitely/not/here/config.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "admins = not-a-list").unwrap();

        let result = Settings::load(&path);
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}

//! Ledger store - persistent mapping of user id to account.
//!
//! The document is a single JSON object mapping Discord user ids to accounts:
//! `{ "<user-id>": { "balance": 0.0, "seed_phrase": "..." } }`.

use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A user's ledger entry: balance in Bs. plus the recovery phrase shown once
/// at account creation. The phrase is cosmetic, not a secret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Current balance in Bs. Never negative.
    pub balance: f64,
    /// Three-word recovery phrase, generated once and immutable.
    pub seed_phrase: String,
}

/// Handle to the ledger document on disk.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Creates a store backed by the given document path. The file does not
    /// need to exist yet; a missing document loads as an empty ledger.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads the full ledger. A missing file or malformed document yields an
    /// empty mapping; corruption is logged, never surfaced as an error.
    #[must_use]
    pub fn load(&self) -> HashMap<String, Account> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(accounts) => accounts,
                Err(e) => {
                    warn!(path = %self.path.display(), "Malformed ledger document, starting empty: {e}");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        }
    }

    /// Replaces the whole document with the given mapping, pretty-printed.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails; the caller
    /// decides how to report it.
    pub fn save(&self, accounts: &HashMap<String, Account>) -> Result<()> {
        let json = serde_json::to_string_pretty(accounts)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::temp_store_dir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = temp_store_dir();
        let store = LedgerStore::new(dir.path().join("user_data.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let dir = temp_store_dir();
        let path = dir.path().join("user_data.json");
        fs::write(&path, "{ not json").unwrap();
        let store = LedgerStore::new(&path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = temp_store_dir();
        let store = LedgerStore::new(dir.path().join("user_data.json"));

        let mut accounts = HashMap::new();
        accounts.insert(
            "42".to_string(),
            Account {
                balance: 1234.5,
                seed_phrase: "sol luna flor".to_string(),
            },
        );
        accounts.insert(
            "7".to_string(),
            Account {
                balance: 0.0,
                seed_phrase: "perro rojo libro".to_string(),
            },
        );
        store.save(&accounts).unwrap();

        assert_eq!(store.load(), accounts);
    }

    #[test]
    fn test_save_overwrites_previous_document() {
        let dir = temp_store_dir();
        let store = LedgerStore::new(dir.path().join("user_data.json"));

        let mut accounts = HashMap::new();
        accounts.insert(
            "42".to_string(),
            Account {
                balance: 10.0,
                seed_phrase: "azul feliz montaña".to_string(),
            },
        );
        store.save(&accounts).unwrap();

        accounts.get_mut("42").unwrap().balance = 20.0;
        store.save(&accounts).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded["42"].balance, 20.0);
    }

    #[test]
    fn test_save_to_unwritable_path_errors() {
        let dir = temp_store_dir();
        // The parent directory does not exist, so the write must fail and the
        // failure must be visible to the caller.
        let store = LedgerStore::new(dir.path().join("missing").join("user_data.json"));
        let result = store.save(&HashMap::new());
        assert!(result.is_err());
    }
}

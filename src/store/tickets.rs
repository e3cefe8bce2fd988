//! Ticket store - card price and per-user card assignments.
//!
//! The document shape is `{ "price": 1000.0, "tickets": { "<user-id>":
//! [[n,n,n],[n,n,n],[n,n,n]] } }`. Both fields are serde-defaulted so a
//! partially written or legacy document heals on every load: a missing
//! `price` becomes [`DEFAULT_PRICE`], a missing `tickets` becomes empty.

use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Price a card sells for until an administrator changes it.
pub const DEFAULT_PRICE: f64 = 1000.0;

/// A 3×3 bingo card: nine distinct numbers in [1, 50], three rows of three.
pub type Card = [[u8; 3]; 3];

const fn default_price() -> f64 {
    DEFAULT_PRICE
}

/// The whole persisted ticket document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketDocument {
    /// Current card price in Bs. Positive.
    #[serde(default = "default_price")]
    pub price: f64,
    /// Active card per user. A purchase overwrites any prior entry.
    #[serde(default)]
    pub tickets: HashMap<String, Card>,
}

impl Default for TicketDocument {
    fn default() -> Self {
        Self {
            price: DEFAULT_PRICE,
            tickets: HashMap::new(),
        }
    }
}

/// Handle to the ticket document on disk.
#[derive(Debug, Clone)]
pub struct TicketStore {
    path: PathBuf,
}

impl TicketStore {
    /// Creates a store backed by the given document path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads the document, defaulting missing fields. A missing or malformed
    /// file yields the default document; corruption is logged, not surfaced.
    #[must_use]
    pub fn load(&self) -> TicketDocument {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(doc) => doc,
                Err(e) => {
                    warn!(path = %self.path.display(), "Malformed ticket document, using defaults: {e}");
                    TicketDocument::default()
                }
            },
            Err(_) => TicketDocument::default(),
        }
    }

    /// Replaces the whole document, pretty-printed.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, doc: &TicketDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(doc)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

//! Shared test utilities for `BingoBanker`.
//!
//! Store fixtures are backed by a temp directory; keep the returned `TempDir`
//! alive for the duration of the test or the documents vanish underneath the
//! stores.

#![allow(clippy::expect_used)]

use crate::store::{LedgerStore, TicketStore};
use tempfile::TempDir;

/// Creates a fresh temp directory for store documents.
pub fn temp_store_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Creates an empty ledger/ticket store pair in a fresh temp directory.
/// This is the standard setup for store and transaction tests.
pub fn setup_stores() -> (TempDir, LedgerStore, TicketStore) {
    let dir = temp_store_dir();
    let ledger = LedgerStore::new(dir.path().join("user_data.json"));
    let tickets = TicketStore::new(dir.path().join("bingo_data.json"));
    (dir, ledger, tickets)
}

//! JSON-backed persistence for the ledger and ticket documents.
//!
//! Both stores follow the same discipline: the whole document is read on every
//! operation and rewritten in full on every mutation, pretty-printed so the
//! files stay hand-editable. Loads heal silently (a missing or malformed file
//! becomes the empty/default document); saves return their result to the
//! caller so a failed write is reported rather than assumed to have succeeded.

/// Persistent store of user accounts (balance + recovery phrase).
pub mod ledger;

/// Persistent store of the card price and per-user card assignments.
pub mod tickets;

pub use ledger::{Account, LedgerStore};
pub use tickets::{Card, DEFAULT_PRICE, TicketDocument, TicketStore};

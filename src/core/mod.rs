//! Core business logic - framework-agnostic account, card, and purchase
//! operations over the JSON stores.

/// Account lifecycle and ledger transactions (create, credit, debit)
pub mod account;

/// Card generation and rendering
pub mod card;

/// Purchase orchestration and card price administration
pub mod purchase;

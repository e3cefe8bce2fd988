//! Unified error types and result handling.
//!
//! Domain errors (missing accounts, insufficient funds, bad amounts) carry the
//! values the bot layer needs to build its user-facing replies; infrastructure
//! errors wrap I/O, serialization, and framework failures.

use thiserror::Error;

/// All error conditions the bot can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong.
        message: String,
    },

    /// Underlying file I/O failure while persisting or loading a store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure on a store document.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Required environment variable is missing or invalid.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// The user already has an account.
    #[error("Account already exists for user {user_id}")]
    AccountExists {
        /// Discord user id of the existing account.
        user_id: String,
    },

    /// No account found for the given user id.
    #[error("No account found for user {user_id}")]
    AccountNotFound {
        /// Discord user id that was looked up.
        user_id: String,
    },

    /// An operation requiring an account was invoked without one.
    #[error("An account is required for this operation")]
    AccountRequired,

    /// Balance too low to cover the requested amount.
    #[error("Insufficient funds: have Bs. {current:.2}, need Bs. {required:.2}")]
    InsufficientFunds {
        /// Current account balance.
        current: f64,
        /// Amount the operation required.
        required: f64,
    },

    /// Amount was zero, negative, or not finite.
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The offending amount.
        amount: f64,
    },

    /// Requester is not in the administrator set.
    #[error("Unauthorized")]
    Unauthorized,

    /// Serenity/Poise framework error.
    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Error::FrameworkError(Box::new(value))
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

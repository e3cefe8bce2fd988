//! Account business logic - creation, lookups, and ledger transactions.
//!
//! Every mutation follows the store discipline: load the full ledger, change
//! it in memory, persist, and return the updated account. Persistence errors
//! propagate to the caller so a failed write is never reported as success.

use crate::{
    errors::{Error, Result},
    store::{Account, LedgerStore},
};
use rand::seq::SliceRandom;

/// Fixed word pool the recovery phrases draw from. The phrase is a cosmetic
/// recovery hint for a Spanish-speaking community, not a secret.
const SEED_WORDS: [&str; 10] = [
    "manzana", "perro", "flor", "sol", "luna", "rojo", "azul", "libro", "feliz", "montaña",
];

/// Generates a three-word recovery phrase, words drawn without replacement.
#[must_use]
pub fn generate_seed_phrase() -> String {
    let mut rng = rand::thread_rng();
    SEED_WORDS
        .choose_multiple(&mut rng, 3)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Creates an account with zero balance and a fresh recovery phrase.
///
/// # Errors
/// Returns [`Error::AccountExists`] if the user already has an account, or a
/// persistence error if the ledger could not be written.
pub fn create_account(store: &LedgerStore, user_id: &str) -> Result<Account> {
    let mut accounts = store.load();

    if accounts.contains_key(user_id) {
        return Err(Error::AccountExists {
            user_id: user_id.to_string(),
        });
    }

    let account = Account {
        balance: 0.0,
        seed_phrase: generate_seed_phrase(),
    };
    accounts.insert(user_id.to_string(), account.clone());
    store.save(&accounts)?;

    Ok(account)
}

/// Looks up a user's account, if any.
#[must_use]
pub fn get_account(store: &LedgerStore, user_id: &str) -> Option<Account> {
    store.load().remove(user_id)
}

/// Adds a positive amount to an existing account's balance.
///
/// # Errors
/// Returns [`Error::InvalidAmount`] for non-positive or non-finite amounts,
/// [`Error::AccountNotFound`] if the user has no account, or a persistence
/// error if the ledger could not be written.
pub fn credit(store: &LedgerStore, user_id: &str, amount: f64) -> Result<Account> {
    if amount <= 0.0 || !amount.is_finite() {
        return Err(Error::InvalidAmount { amount });
    }

    let mut accounts = store.load();
    let account = accounts
        .get_mut(user_id)
        .ok_or_else(|| Error::AccountNotFound {
            user_id: user_id.to_string(),
        })?;

    account.balance += amount;
    let updated = account.clone();
    store.save(&accounts)?;

    Ok(updated)
}

/// Subtracts a positive amount from an existing account's balance. The
/// balance never goes below zero; an overdraw fails without mutating the
/// store.
///
/// # Errors
/// Returns [`Error::InvalidAmount`], [`Error::AccountNotFound`], or
/// [`Error::InsufficientFunds`] carrying the current balance and the amount
/// required; persistence errors propagate.
pub fn debit(store: &LedgerStore, user_id: &str, amount: f64) -> Result<Account> {
    if amount <= 0.0 || !amount.is_finite() {
        return Err(Error::InvalidAmount { amount });
    }

    let mut accounts = store.load();
    let account = accounts
        .get_mut(user_id)
        .ok_or_else(|| Error::AccountNotFound {
            user_id: user_id.to_string(),
        })?;

    if account.balance < amount {
        return Err(Error::InsufficientFunds {
            current: account.balance,
            required: amount,
        });
    }

    account.balance -= amount;
    let updated = account.clone();
    store.save(&accounts)?;

    Ok(updated)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::setup_stores;

    #[test]
    fn test_generate_seed_phrase_is_three_distinct_pool_words() {
        for _ in 0..50 {
            let phrase = generate_seed_phrase();
            let words: Vec<&str> = phrase.split(' ').collect();

            assert_eq!(words.len(), 3);
            assert!(words.iter().all(|w| SEED_WORDS.contains(w)));
            assert_ne!(words[0], words[1]);
            assert_ne!(words[0], words[2]);
            assert_ne!(words[1], words[2]);
        }
    }

    #[test]
    fn test_create_account_starts_at_zero() {
        let (_dir, ledger, _tickets) = setup_stores();

        let account = create_account(&ledger, "42").unwrap();
        assert_eq!(account.balance, 0.0);
        assert!(!account.seed_phrase.is_empty());

        // Persisted, not just returned.
        assert_eq!(get_account(&ledger, "42").unwrap(), account);
    }

    #[test]
    fn test_create_account_twice_keeps_original() {
        let (_dir, ledger, _tickets) = setup_stores();

        let original = create_account(&ledger, "42").unwrap();
        let result = create_account(&ledger, "42");

        assert!(matches!(result, Err(Error::AccountExists { .. })));
        // The stored account, including its recovery phrase, is untouched.
        assert_eq!(get_account(&ledger, "42").unwrap(), original);
    }

    #[test]
    fn test_credit_increases_balance_by_exact_amount() {
        let (_dir, ledger, _tickets) = setup_stores();
        create_account(&ledger, "42").unwrap();

        let account = credit(&ledger, "42", 5000.0).unwrap();
        assert_eq!(account.balance, 5000.0);

        let account = credit(&ledger, "42", 0.5).unwrap();
        assert_eq!(account.balance, 5000.5);
    }

    #[test]
    fn test_credit_unknown_account_leaves_store_unchanged() {
        let (_dir, ledger, _tickets) = setup_stores();
        create_account(&ledger, "42").unwrap();

        let result = credit(&ledger, "99", 100.0);
        assert!(matches!(result, Err(Error::AccountNotFound { .. })));

        let accounts = ledger.load();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts["42"].balance, 0.0);
    }

    #[test]
    fn test_credit_rejects_non_positive_amounts() {
        let (_dir, ledger, _tickets) = setup_stores();
        create_account(&ledger, "42").unwrap();

        for amount in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = credit(&ledger, "42", amount);
            assert!(matches!(result, Err(Error::InvalidAmount { .. })));
        }
        assert_eq!(get_account(&ledger, "42").unwrap().balance, 0.0);
    }

    #[test]
    fn test_debit_never_overdraws() {
        let (_dir, ledger, _tickets) = setup_stores();
        create_account(&ledger, "42").unwrap();
        credit(&ledger, "42", 100.0).unwrap();

        let result = debit(&ledger, "42", 150.0);
        assert!(matches!(
            result,
            Err(Error::InsufficientFunds {
                current: 100.0,
                required: 150.0
            })
        ));
        // Failed debit leaves the balance unchanged.
        assert_eq!(get_account(&ledger, "42").unwrap().balance, 100.0);

        let account = debit(&ledger, "42", 100.0).unwrap();
        assert_eq!(account.balance, 0.0);
    }

    #[test]
    fn test_debit_unknown_account_fails() {
        let (_dir, ledger, _tickets) = setup_stores();

        let result = debit(&ledger, "42", 10.0);
        assert!(matches!(result, Err(Error::AccountNotFound { .. })));
    }
}

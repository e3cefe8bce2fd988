//! Purchase orchestration and card price administration.
//!
//! A purchase spans both stores in a fixed order: account check, fresh price
//! read, funds check, debit (persisted), card generation, assignment
//! (persisted). The price is always read from the ticket document at the
//! moment of purchase; no mirrored in-memory price exists to drift from it.
//!
//! The two stores are persisted independently, so a crash between the debit
//! write and the assignment write leaves the user charged without a card.
//! Accepted risk for this system's stakes.

use crate::{
    core::{account, card},
    errors::{Error, Result},
    store::{Card, LedgerStore, TicketStore},
};

/// Outcome of a successful purchase, for the bot layer to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// The freshly generated card now assigned to the buyer.
    pub card: Card,
    /// Price actually charged, as read from the ticket store.
    pub price: f64,
    /// Buyer's balance after the debit.
    pub new_balance: f64,
}

/// Buys a card for the given user: debits the current price and assigns a
/// fresh card, overwriting any previous assignment.
///
/// # Errors
/// Returns [`Error::AccountRequired`] if the user has no account,
/// [`Error::InsufficientFunds`] (with balance and price) if they cannot
/// afford the card, or a persistence error from either store. No store is
/// mutated on a failed precondition.
pub fn purchase_card(ledger: &LedgerStore, tickets: &TicketStore, user_id: &str) -> Result<Receipt> {
    let Some(buyer) = account::get_account(ledger, user_id) else {
        return Err(Error::AccountRequired);
    };

    let mut doc = tickets.load();
    let price = doc.price;

    if buyer.balance < price {
        return Err(Error::InsufficientFunds {
            current: buyer.balance,
            required: price,
        });
    }

    let debited = account::debit(ledger, user_id, price)?;

    let new_card = card::generate_card();
    doc.tickets.insert(user_id.to_string(), new_card);
    tickets.save(&doc)?;

    Ok(Receipt {
        card: new_card,
        price,
        new_balance: debited.balance,
    })
}

/// Sets the card price. Takes effect for every subsequent purchase.
///
/// # Errors
/// Returns [`Error::InvalidAmount`] for non-positive or non-finite prices;
/// persistence errors propagate.
pub fn set_card_price(tickets: &TicketStore, price: f64) -> Result<f64> {
    if price <= 0.0 || !price.is_finite() {
        return Err(Error::InvalidAmount { amount: price });
    }

    let mut doc = tickets.load();
    doc.price = price;
    tickets.save(&doc)?;

    Ok(price)
}

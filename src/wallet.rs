//! Wallet model and operations.
//!
//! Maintains the invariant: `balance >= 0` at all times.

use crate::error::{PaymentError, Result};
use crate::money::Money;
use log::debug;
use std::io::Write;

/// Notice written when a deduction exceeds the balance.
pub const INSUFFICIENT_FUNDS: &str = "Insufficient funds.";

/// Holds a single balance that payments are drawn from.
///
/// # Invariants
///
/// - `balance >= 0` after construction and after every deduction
/// - The balance only changes through [`Wallet::try_deduct`] or [`Wallet::deduct`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    balance: Money,
}

impl Wallet {
    /// Opens a wallet with the given balance.
    ///
    /// Returns [`PaymentError::NegativeBalance`] if `initial` is below zero.
    pub fn new(initial: Money) -> Result<Self> {
        if initial.is_negative() {
            return Err(PaymentError::NegativeBalance(initial));
        }

        Ok(Wallet { balance: initial })
    }

    /// Returns the current balance.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Deducts `amount` from the balance if there are enough funds.
    ///
    /// Returns `Ok(true)` if the deduction succeeded and `Ok(false)` if
    /// `amount` exceeds the balance, in which case the balance is unchanged.
    /// A negative `amount` is rejected with [`PaymentError::NegativeAmount`].
    pub fn try_deduct(&mut self, amount: Money) -> Result<bool> {
        if amount.is_negative() {
            return Err(PaymentError::NegativeAmount(amount));
        }

        if amount > self.balance {
            debug!(
                "Deduction of {} refused, balance is {}",
                amount, self.balance
            );
            return Ok(false);
        }

        self.balance -= amount;
        debug!("Deducted {}, balance now {}", amount, self.balance);
        Ok(true)
    }

    /// Like [`Wallet::try_deduct`], but also writes the insufficient funds
    /// notice to `out` when the deduction is refused.
    pub fn deduct<W: Write>(&mut self, amount: Money, out: &mut W) -> Result<bool> {
        let deducted = self.try_deduct(amount)?;
        if !deducted {
            writeln!(out, "{}", INSUFFICIENT_FUNDS)?;
        }
        Ok(deducted)
    }
}

//! Error types for the payment system.

use crate::money::Money;
use thiserror::Error;

/// Result type alias for payment operations
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Errors that can occur while running payments.
///
/// Insufficient funds is not an error: `Wallet::deduct` reports it as `false`.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Failed to write output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Wallet opened with a balance below zero
    #[error("Initial balance must not be negative, got {0}")]
    NegativeBalance(Money),

    /// Deduction requested for an amount below zero
    #[error("Deduction amount must not be negative, got {0}")]
    NegativeAmount(Money),
}
